use std::io::{self, Write};

use crate::solver::Solver;

/// Writes the outcome of a solve in the standard text layout.
///
/// An unsolvable board prints a single `No solution possible` line. A solvable
/// one prints `Minimum number of moves = <moves>`, then every board of the
/// solution, each preceded by a blank line.
pub fn write_report<W: Write>(solver: &Solver, out: &mut W) -> io::Result<()> {
    let (Some(moves), Some(path)) = (solver.moves(), solver.solution()) else {
        return writeln!(out, "No solution possible");
    };

    writeln!(out, "Minimum number of moves = {}", moves)?;
    for board in path {
        write!(out, "\n{}", board)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn render(board: &Board) -> String {
        let mut out = Vec::new();
        write_report(&Solver::new(board), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_for_solvable_board() {
        let board: Board = "2\n1 2\n0 3".parse().unwrap();
        assert_eq!(
            render(&board),
            "Minimum number of moves = 1\n\n2\n 1 2\n 0 3\n\n2\n 1 2\n 3 0\n"
        );
    }

    #[test]
    fn test_report_for_unsolvable_board() {
        let board: Board = "2\n2 1\n3 0".parse().unwrap();
        assert_eq!(render(&board), "No solution possible\n");
    }
}
