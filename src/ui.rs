#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::board::{Board, Cell};

/// Glyph for a cell. Ships are drawn by their number only when `reveal` is
/// set, so a tracking view never leaks positions.
fn cell_char(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Hit => 'X',
        Cell::Miss => 'O',
        Cell::Ship(id) if reveal => char::from_digit(u32::from(id.0), 36).unwrap_or('#'),
        Cell::Ship(_) | Cell::Empty => '~',
    }
}

fn render(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for c in 0..board.size() {
        let _ = write!(out, " {}", (b'A' + c) as char);
    }
    out.push('\n');
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:2}", r + 1);
        for &cell in row {
            let _ = write!(out, " {}", cell_char(cell, reveal));
        }
        out.push('\n');
    }
    out
}

/// A player's own board with ships shown.
pub fn render_ocean(board: &Board) -> String {
    render(board, true)
}

/// A tracking board: hits and misses only.
pub fn render_tracking(board: &Board) -> String {
    render(board, false)
}
