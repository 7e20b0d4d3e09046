//! Pure board rules: state, movement, target generation.
//!
//! Nothing in this module touches the DOM, so the whole state machine runs
//! under native `cargo test`. The UI layer owns exactly one [`GameState`]
//! and feeds it discrete directional inputs; every counter lives as a field
//! of that single value.

/// The four logical directional inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Maps a DOM `KeyboardEvent.key` identifier. Anything else (e.g.
    /// `"Escape"`) yields `None` and must be ignored by the caller.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Player coordinate on the board, `0 <= x < width`, `0 <= y < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

/// Board construction failures. Zero dimensions are configuration errors
/// and are rejected before any state exists.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("board width must be a positive integer")]
    ZeroWidth,
    #[error("board height must be a positive integer")]
    ZeroHeight,
}

/// Outcome of feeding one directional input to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Input arrived after the game finished; nothing changed.
    Ignored,
    /// The move ran into a wall; coordinate and counter unchanged.
    Blocked,
    /// The token moved to an empty cell.
    Moved,
    /// The token moved onto a target and collected it.
    Cleared,
    /// The move collected the last target; the game is now finished.
    Completed,
}

/// The whole game: board dimensions, player position, per-row targets and
/// the move / remaining counters.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    width: u32,
    height: u32,
    player: Position,
    /// One entry per row: `Some(col)` while the row's target is uncollected.
    targets: Vec<Option<u32>>,
    moves: u32,
    remaining: u32,
    finished: bool,
}

impl GameState {
    /// Builds a fresh board. The player spawns at the center; one target is
    /// drawn per row via `rand_col`, which must return a uniform value in
    /// `[0, bound)`. Production passes [`random_draw`]; tests inject
    /// scripted sequences.
    pub fn new(
        width: u32,
        height: u32,
        mut rand_col: impl FnMut(u32) -> u32,
    ) -> Result<Self, SetupError> {
        if width == 0 {
            return Err(SetupError::ZeroWidth);
        }
        if height == 0 {
            return Err(SetupError::ZeroHeight);
        }

        let player = Position {
            x: width / 2,
            y: height / 2,
        };

        let mut targets: Vec<Option<u32>> = (0..height).map(|_| Some(rand_col(width))).collect();

        let spawn_row = player.y as usize;
        if width > 1 {
            // The token must not spawn on top of a target. Each redraw misses
            // with probability 1/width, so expected iterations are bounded.
            while targets[spawn_row] == Some(player.x) {
                targets[spawn_row] = Some(rand_col(width));
            }
        }

        let mut remaining = height;
        let mut finished = false;
        if width == 1 {
            // No alternative column exists, so the spawn row's target counts
            // as collected on arrival.
            targets[spawn_row] = None;
            remaining -= 1;
            finished = remaining == 0;
        }

        Ok(Self {
            width,
            height,
            player,
            targets,
            moves: 0,
            remaining,
            finished,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn player(&self) -> Position {
        self.player
    }

    /// Moves accepted so far. Frozen once the game finishes.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Count of rows whose target is still uncollected.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The uncollected target column of `row`, or `None` once collected.
    /// Rows outside the board also report `None`.
    pub fn target_in_row(&self, row: u32) -> Option<u32> {
        self.targets.get(row as usize).copied().flatten()
    }

    /// Applies one directional input. Edge clamping keeps the coordinate on
    /// the board; only an actual coordinate change counts as a move. Once
    /// finished, every input is a silent no-op.
    pub fn step(&mut self, dir: Direction) -> Step {
        if self.finished {
            return Step::Ignored;
        }

        let Position { x, y } = self.player;
        let next = match dir {
            Direction::Up => Position {
                x,
                y: y.saturating_sub(1),
            },
            Direction::Down => Position {
                x,
                y: (y + 1).min(self.height - 1),
            },
            Direction::Left => Position {
                x: x.saturating_sub(1),
                y,
            },
            Direction::Right => Position {
                x: (x + 1).min(self.width - 1),
                y,
            },
        };

        if next == self.player {
            return Step::Blocked;
        }

        self.player = next;
        self.moves += 1;

        let row = next.y as usize;
        if self.targets[row] == Some(next.x) {
            self.targets[row] = None;
            self.remaining -= 1;
            if self.remaining == 0 {
                self.finished = true;
                return Step::Completed;
            }
            return Step::Cleared;
        }

        Step::Moved
    }
}

/// Uniform draw in `[0, bound)` backed by the platform RNG (`getrandom`,
/// which routes to `crypto.getRandomValues` on wasm). Falls back to column 0
/// if the platform RNG is unavailable.
pub fn random_draw(bound: u32) -> u32 {
    debug_assert!(bound > 0);
    let mut buf = [0u8; 4];
    if getrandom::getrandom(&mut buf).is_err() {
        return 0;
    }
    u32::from_le_bytes(buf) % bound
}
