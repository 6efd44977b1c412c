//! Reads the plain-text board format: the dimension `n`, then `n` rows of `n`
//! whitespace-separated tiles, `0` marking the blank.
//!
//! ```text
//! 3
//!  0  1  3
//!  4  2  5
//!  7  8  6
//! ```
//!
//! Line breaks are not significant; only the token order is.

use crate::board::Board;
use crate::error::{BoardError, ParseError};

/// Parses a board from text.
///
/// # Examples
/// ```
/// use slider_solver::input::parse_board;
///
/// let board = parse_board("2\n1 2\n3 0\n").unwrap();
/// assert!(board.is_goal());
/// assert!(parse_board("2\n1 2\n3").is_err());
/// ```
pub fn parse_board(input: &str) -> Result<Board, ParseError> {
    let mut tokens = input.split_whitespace();

    let dimension: usize = match tokens.next() {
        Some(token) => parse_token(token)?,
        None => return Err(ParseError::MissingDimension),
    };
    let expected = dimension
        .checked_mul(dimension)
        .ok_or(BoardError::DimensionTooLarge(dimension))?;

    let mut tiles = Vec::new();
    while tiles.len() < expected {
        match tokens.next() {
            Some(token) => tiles.push(parse_token(token)?),
            None => {
                return Err(ParseError::MissingTiles {
                    expected,
                    found: tiles.len(),
                })
            }
        }
    }

    if let Some(token) = tokens.next() {
        return Err(ParseError::TrailingToken {
            token: token.to_string(),
        });
    }

    Ok(Board::from_tiles(dimension, tiles)?)
}

fn parse_token<T>(token: &str) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    token.parse().map_err(|source| ParseError::InvalidToken {
        token: token.to_string(),
        source,
    })
}
