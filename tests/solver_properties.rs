use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use slider_solver::{Board, Solver};

/// Inversion-parity test for solvability, used only to cross-check the
/// twin-based verdict.
fn parity_solvable(board: &Board) -> bool {
    let tiles: Vec<u32> = board.tiles().iter().copied().filter(|&t| t != 0).collect();
    let inversions: usize = tiles
        .iter()
        .enumerate()
        .map(|(i, &val)| tiles[i + 1..].iter().filter(|&&next| next < val).count())
        .sum();

    let size = board.dimension();
    if size % 2 == 1 {
        inversions % 2 == 0
    } else {
        let (empty_row, _) = board.blank();
        (inversions + empty_row) % 2 == 1
    }
}

/// Checks that the reported path starts at `initial`, ends at the goal and
/// that every step is one legal slide.
fn assert_valid_path(initial: &Board, solver: &Solver) {
    let path = solver.solution().expect("solvable board has a path");
    let moves = solver.moves().expect("solvable board has a move count");
    assert_eq!(path.len(), moves + 1);
    assert_eq!(&path[0], initial);
    assert!(path[moves].is_goal());
    for pair in path.windows(2) {
        assert!(pair[0].neighbors().any(|next| next == pair[1]));
    }

    // Replaying the slides from the first board reproduces the path.
    let slides = solver.slides().expect("slides follow the path");
    let mut current = initial.clone();
    for (step, slide) in slides.into_iter().enumerate() {
        current = current.slide(slide).expect("replayed slide is legal");
        assert_eq!(current, path[step + 1]);
    }
}

fn permutation_board(dimension: usize) -> impl Strategy<Value = Board> {
    let cells = (dimension * dimension) as u32;
    Just((0..cells).collect::<Vec<u32>>())
        .prop_shuffle()
        .prop_map(move |tiles| Board::from_tiles(dimension, tiles).unwrap())
}

#[test]
fn every_two_by_two_board_has_exactly_one_solvable_twin() {
    let mut solvable = 0;
    let mut tiles = vec![0u32, 1, 2, 3];
    for _ in 0..24 {
        let board = Board::from_tiles(2, tiles.clone()).unwrap();
        let twin = board.twin().unwrap();
        let main = Solver::new(&board);
        assert_ne!(main.is_solvable(), Solver::new(&twin).is_solvable());
        assert_eq!(main.is_solvable(), parity_solvable(&board));
        if main.is_solvable() {
            solvable += 1;
            assert_valid_path(&board, &main);
        }
        next_permutation(&mut tiles);
    }
    assert_eq!(solvable, 12);
}

fn next_permutation(v: &mut [u32]) {
    let Some(i) = (1..v.len()).rev().find(|&i| v[i - 1] < v[i]) else {
        v.reverse();
        return;
    };
    let j = (i..v.len()).rev().find(|&j| v[j] > v[i - 1]).unwrap();
    v.swap(i - 1, j);
    v[i..].reverse();
}

#[test]
fn scrambled_fifteen_puzzle_is_solved_optimally_enough() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..5 {
        let board = Board::scramble(4, 12, &mut rng);
        let solver = Solver::new(&board);
        assert!(solver.is_solvable());
        assert!(solver.moves().unwrap() <= 12);
        assert_valid_path(&board, &solver);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scrambled_boards_solve_within_scramble_length(
        dimension in 2usize..=3,
        steps in 0usize..18,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::scramble(dimension, steps, &mut rng);
        let solver = Solver::new(&board);

        prop_assert!(solver.is_solvable());
        let moves = solver.moves().unwrap();
        prop_assert!(moves <= steps);
        prop_assert!(moves >= board.manhattan() as usize);
        prop_assert_eq!(moves % 2, steps % 2);
        assert_valid_path(&board, &solver);
    }

    #[test]
    fn neighbor_count_depends_on_blank_position(
        dimension in 2usize..=5,
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let (row, col) = (row_seed % dimension, col_seed % dimension);
        let mut tiles = Board::goal(dimension).tiles().to_vec();
        tiles.swap(dimension * dimension - 1, row * dimension + col);
        let board = Board::from_tiles(dimension, tiles).unwrap();

        let on_edge = |i: usize| i == 0 || i == dimension - 1;
        let expected = 4 - usize::from(on_edge(row)) - usize::from(on_edge(col));
        prop_assert_eq!(board.neighbors().count(), expected);
        for next in board.neighbors() {
            prop_assert_ne!(&next, &board);
            prop_assert_eq!(next.dimension(), dimension);
        }
    }

    #[test]
    fn twin_differs_in_two_adjacent_tiles(board in permutation_board(4)) {
        let twin = board.twin().unwrap();
        prop_assert_eq!(twin.blank(), board.blank());
        let differing: Vec<usize> = board
            .tiles()
            .iter()
            .zip(twin.tiles())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(differing.len(), 2);
        prop_assert_eq!(differing[1], differing[0] + 1);
        prop_assert_eq!(differing[0] % 4, 0);
        prop_assert_ne!(parity_solvable(&board), parity_solvable(&twin));
    }

    #[test]
    fn metrics_vanish_only_at_goal(board in permutation_board(3)) {
        prop_assert!(board.hamming() <= board.manhattan());
        prop_assert_eq!(board.is_goal(), board.manhattan() == 0);
        prop_assert_eq!(board.is_goal(), board == Board::goal(3));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn exactly_one_of_board_and_twin_is_solvable(board in permutation_board(3)) {
        let solver = Solver::new(&board);
        let twin = Solver::new(&board.twin().unwrap());
        prop_assert_ne!(solver.is_solvable(), twin.is_solvable());
        prop_assert_eq!(solver.is_solvable(), parity_solvable(&board));
        if solver.is_solvable() {
            assert_valid_path(&board, &solver);
        } else {
            prop_assert!(solver.moves().is_none());
            prop_assert!(solver.solution().is_none());
        }
    }
}
