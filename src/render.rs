//! Markup projection of the game state.
//!
//! Pure string building with no DOM access, so cell classification and the
//! finished tally are testable under native `cargo test`. The UI layer
//! applies these strings via `set_inner_html`.

use crate::game::{Direction, GameState};

/// Stable hook for harnesses asserting on the grid container.
pub const GRID_TESTID: &str = "game-table";
/// Stable hook for harnesses asserting on the move counter, in both the
/// playing and finished layouts.
pub const COUNTER_TESTID: &str = "moveCounter";

/// CSS class of the cell currently holding the player token.
pub const CLASS_USER: &str = "has-user";
/// CSS class of a cell holding an uncollected target sprite.
pub const CLASS_SPRITE: &str = "has-sprite";

/// Classifies one cell. `has-user` wins over `has-sprite` when the player
/// stands where a sprite would render; collected targets render plain.
pub fn cell_class(state: &GameState, x: u32, y: u32) -> String {
    let player = state.player();
    if player.x == x && player.y == y {
        return format!("board-cell {CLASS_USER}");
    }
    if state.target_in_row(y) == Some(x) {
        // Cosmetic sprite variant cycles with the column.
        let variant = x % 3 + 1;
        return format!("board-cell {CLASS_SPRITE} sprite-{variant}");
    }
    "board-cell".to_string()
}

/// `<tr>` rows for the board body, one `<td>` per cell.
pub fn grid_rows(state: &GameState) -> String {
    let mut markup = String::new();
    for y in 0..state.height() {
        markup.push_str("<tr>");
        for x in 0..state.width() {
            markup.push_str("<td class=\"");
            markup.push_str(&cell_class(state, x, y));
            markup.push_str("\"></td>");
        }
        markup.push_str("</tr>");
    }
    markup
}

/// Live counter paragraph shown under the grid while playing.
pub fn progress(moves: u32) -> String {
    format!(
        "Moves so far &nbsp;<strong data-testid=\"{COUNTER_TESTID}\">{moves}</strong>"
    )
}

/// Final tally shown in place of the grid and controls once every target
/// is collected.
pub fn tally(moves: u32) -> String {
    format!(
        "<p class=\"moves\">Took &nbsp;<strong data-testid=\"{COUNTER_TESTID}\">{moves}</strong>&nbsp; moves<br><br>Refresh page to play again</p>"
    )
}

/// Inline SVG arrow glyph for one gamepad control.
pub fn arrow_svg(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => {
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" width=\"36\" height=\"36\"><path fill=\"none\" d=\"M0 0h24v24H0z\"/><path d=\"M12 8l6 6H6z\" fill=\"rgba(255,255,255,1)\"/></svg>"
        }
        Direction::Right => {
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" width=\"36\" height=\"36\"><path fill=\"none\" d=\"M0 0h24v24H0z\"/><path d=\"M16 12l-6 6V6z\" fill=\"rgba(255,255,255,1)\"/></svg>"
        }
        Direction::Left => {
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" width=\"36\" height=\"36\"><path fill=\"none\" d=\"M0 0h24v24H0z\"/><path d=\"M8 12l6-6v12z\" fill=\"rgba(255,255,255,1)\"/></svg>"
        }
        Direction::Down => {
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" width=\"36\" height=\"36\"><path fill=\"none\" d=\"M0 0h24v24H0z\"/><path d=\"M12 16l-6-6h12z\" fill=\"rgba(255,255,255,1)\"/></svg>"
        }
    }
}

/// Modifier suffix of a gamepad control's BEM class.
pub fn control_suffix(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => "up",
        Direction::Right => "right",
        Direction::Left => "left",
        Direction::Down => "down",
    }
}
