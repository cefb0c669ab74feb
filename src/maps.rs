//! Catalogue of fixed board layouts.

use crate::board::Board;
use crate::common::BoardError;
use crate::config::GRID_SIZE;

const G: usize = GRID_SIZE as usize;

/// Layouts in `Board::from_rows` notation.
pub const MAPS: [[&str; G]; 3] = [
    [
        "IIII.....+",
        ".....OO...",
        ".T...OO...",
        "TTT.....SS",
        ".......SS.",
        "L..*......",
        "L....ZZ...",
        "LL....ZZ.=",
        ".......J..",
        ".......JJJ",
    ],
    [
        ".....*...=",
        ".I....T...",
        ".I...TT...",
        ".I....T...",
        ".I......OO",
        "...+....OO",
        "S.....JJ..",
        "SS..Z.J.LL",
        ".S.ZZ.J..L",
        "...Z.....L",
    ],
    [
        "ZZ.....LLL",
        ".ZZ....L..",
        "..........",
        "...+......",
        "I....TTT..",
        "I.....T...",
        "I........=",
        "I..*....S.",
        ".JJJ..OOSS",
        "...J..OO.S",
    ],
];

pub fn map_count() -> usize {
    MAPS.len()
}

/// Fresh board for catalogue entry `index`.
pub fn map(index: usize) -> Result<Board, BoardError> {
    let rows = MAPS.get(index).ok_or(BoardError::UnknownMap(index))?;
    Board::from_rows(rows)
}
