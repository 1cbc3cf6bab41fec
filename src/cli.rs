#![cfg(feature = "std")]

//! Terminal rendering of the board and parsing of typed input.

use std::fmt::Write as _;
use std::string::String;

use crate::{
    common::{Cell, Side},
    game::Game,
    sprite,
    strategy::Strategy,
    viewport,
};

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click on board coordinates, typed as e.g. `B3`.
    Cell(usize, usize),
    /// Click on screen pixels, typed as e.g. `74 42`.
    Pixel(u32, u32),
    Quit,
}

/// Column letter for `x`; `?` past `Z`.
fn column_label(x: usize) -> char {
    u8::try_from(x)
        .ok()
        .and_then(|x| b'A'.checked_add(x))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}

pub fn coord_to_string(x: usize, y: usize) -> String {
    std::format!("{}{}", column_label(x), y + 1)
}

/// Parse `B3` style notation into `(x, y)`: column letter, 1-based row.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
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
    Some((col, row - 1))
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(Command::Quit);
    }
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(coord), None, None) => parse_coord(coord).map(|(x, y)| Command::Cell(x, y)),
        (Some(px), Some(py), None) => {
            let px = px.parse().ok()?;
            let py = py.parse().ok()?;
            Some(Command::Pixel(px, py))
        }
        _ => None,
    }
}

/// Map a command onto a board cell. Clicks off the board yield `None`.
pub fn resolve_click<S: Strategy>(game: &Game<S>, command: Command) -> Option<Cell> {
    let (x, y) = match command {
        Command::Cell(x, y) => (x, y),
        Command::Pixel(px, py) => viewport::cell_at_pixel(px, py)?,
        Command::Quit => return None,
    };
    game.board().cell_at(x, y).ok()
}

/// Text picture of the board at the current frame. Legal player
/// destinations are marked `+` while it is the player's turn.
pub fn render_board<S: Strategy>(game: &Game<S>) -> String {
    let (width, height) = game.board_dimensions();
    let turn = game.turn();
    let hints = if turn.active == Side::Player && turn.moves_remaining > 0 {
        game.legal_destinations(Side::Player)
    } else {
        Default::default()
    };

    let mut out = String::new();
    out.push_str("   ");
    for x in 0..width {
        let _ = write!(out, " {}", column_label(x));
    }
    out.push('\n');
    for y in 0..height {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..width {
            let ch = match game.board().cell_at(x, y) {
                Ok(cell) if cell.in_set(&hints) => '+',
                Ok(cell) => sprite::glyph_at(game.board().occupant(cell), game.frame()),
                Err(_) => '?',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    let _ = write!(
        out,
        "{} to move, {} move(s) left",
        turn.active, turn.moves_remaining
    );
    out
}

pub fn print_board<S: Strategy>(game: &Game<S>) {
    std::println!("{}", render_board(game));
}
