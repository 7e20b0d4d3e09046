// Integration tests (native) for the movement state machine: clamping, the
// move counter, collisions and the terminal state.

use grid_chase::game::{Direction, GameState, Position, Step};

fn scripted(vals: &[u32]) -> impl FnMut(u32) -> u32 + '_ {
    let mut iter = vals.iter().copied();
    move |bound| iter.next().expect("rng script exhausted") % bound
}

#[test]
fn token_stays_on_the_board() {
    let mut state = GameState::new(3, 3, scripted(&[0, 0, 0, 2])).unwrap();
    let walk = [
        Direction::Up,
        Direction::Up,
        Direction::Left,
        Direction::Left,
        Direction::Down,
        Direction::Down,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Right,
        Direction::Up,
    ];
    for dir in walk {
        state.step(dir);
        let Position { x, y } = state.player();
        assert!(x < 3 && y < 3, "token escaped to ({x}, {y})");
    }
}

#[test]
fn wall_bump_changes_neither_coordinate_nor_counter() {
    // 1x3 board, player at (0, 1): Left is always a wall bump.
    let mut state = GameState::new(1, 3, scripted(&[0, 0, 0])).unwrap();
    assert_eq!(state.step(Direction::Left), Step::Blocked);
    assert_eq!(state.player(), Position { x: 0, y: 1 });
    assert_eq!(state.moves(), 0);
    assert_eq!(state.step(Direction::Left), Step::Blocked);
    assert_eq!(state.player(), Position { x: 0, y: 1 });
    assert_eq!(state.moves(), 0);
}

#[test]
fn counter_increments_once_per_accepted_move() {
    // 3x1 board: player at (1, 0), target redrawn to column 0.
    let mut state = GameState::new(3, 1, scripted(&[1, 0])).unwrap();
    assert_eq!(state.target_in_row(0), Some(0));

    assert_eq!(state.step(Direction::Right), Step::Moved);
    assert_eq!(state.moves(), 1);
    assert_eq!(state.step(Direction::Right), Step::Blocked);
    assert_eq!(state.moves(), 1);
    assert_eq!(state.step(Direction::Up), Step::Blocked);
    assert_eq!(state.moves(), 1);
    assert_eq!(state.step(Direction::Left), Step::Moved);
    assert_eq!(state.moves(), 2);
    assert_eq!(state.step(Direction::Left), Step::Completed);
    assert_eq!(state.moves(), 3);
}

#[test]
fn stepping_onto_a_target_clears_it() {
    // The 5x5 walkthrough: row 2's target redrawn to column 3, one Right
    // collects it.
    let mut state = GameState::new(5, 5, scripted(&[0, 1, 2, 2, 2, 3])).unwrap();
    assert_eq!(state.player(), Position { x: 2, y: 2 });
    assert_eq!(state.target_in_row(2), Some(3));

    assert_eq!(state.step(Direction::Right), Step::Cleared);
    assert_eq!(state.player(), Position { x: 3, y: 2 });
    assert_eq!(state.target_in_row(2), None);
    assert_eq!(state.remaining(), 4);
    assert_eq!(state.moves(), 1);
}

#[test]
fn remaining_count_strictly_decreases_to_zero() {
    // 2x2 board: player (1, 1); row 0 target at column 0, row 1 redrawn to 0.
    let mut state = GameState::new(2, 2, scripted(&[0, 1, 0])).unwrap();
    assert_eq!(state.remaining(), 2);

    assert_eq!(state.step(Direction::Left), Step::Cleared);
    assert_eq!(state.remaining(), 1);
    assert_eq!(state.step(Direction::Up), Step::Completed);
    assert_eq!(state.remaining(), 0);
    assert!(state.is_finished());
}

#[test]
fn finishing_freezes_the_game() {
    // 2x1 board: one target at column 0, one Left ends the game.
    let mut state = GameState::new(2, 1, scripted(&[1, 0])).unwrap();
    assert_eq!(state.step(Direction::Left), Step::Completed);
    assert!(state.is_finished());
    assert_eq!(state.moves(), 1);

    // Every subsequent input is a silent no-op with the counter frozen.
    for dir in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        assert_eq!(state.step(dir), Step::Ignored);
        assert_eq!(state.moves(), 1);
        assert_eq!(state.player(), Position { x: 0, y: 0 });
        assert_eq!(state.remaining(), 0);
    }
}

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
    assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
    assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
    assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
}

#[test]
fn unrecognized_keys_map_to_nothing() {
    for key in ["Escape", "Enter", "a", " ", "Backspace", "arrowup"] {
        assert_eq!(Direction::from_key(key), None, "key {key:?} should be ignored");
    }
}
