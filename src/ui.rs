#![cfg(feature = "std")]

//! ASCII rendering and coordinate parsing for the hotseat CLI.

use crate::board::{Board, CellState};
use crate::common::PlayerId;
use crate::game::GameEngine;

/// Format a (row, col) pair as a board coordinate, e.g. `B3`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parse a coordinate like `B3` (column letter, 1-based row) into (row, col).
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// Print a board. With `reveal` set, unhit ship cells are shown as `S`;
/// otherwise they render as unknown water, which is what an attacker sees.
pub fn print_board(board: &Board, reveal: bool) {
    print!("   ");
    for c in 0..board.size() {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..board.size() {
        print!("{:2} ", r + 1);
        for c in 0..board.size() {
            let ch = match board.cell(r, c) {
                Ok(CellState::Hit) => 'X',
                Ok(CellState::Miss) => 'o',
                Ok(CellState::Ship) if reveal => 'S',
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Display the current player's view: the opponent board masked on top, the
/// player's own board revealed below.
pub fn print_player_view(engine: &GameEngine) {
    let me = engine.current_player();
    let opponent = me.other();
    println!("{}'s grid:", opponent);
    print_board(engine.board(opponent), false);
    println!("\nYour grid:");
    print_board(engine.board(me), true);
}

/// One-line turn banner with mode and selection.
pub fn print_turn_banner(engine: &GameEngine) {
    let mode = if engine.fortify_mode() {
        match engine.selected_ship() {
            Some(id) => format!("fortify, {} selected", id),
            None => "fortify".to_string(),
        }
    } else {
        "attack".to_string()
    };
    println!("\nTurn: {} ({} mode)", engine.current_player(), mode);
}

/// Game-over summary.
pub fn print_game_over(winner: PlayerId) {
    println!("\nGAME OVER! {} wins!", winner);
}
