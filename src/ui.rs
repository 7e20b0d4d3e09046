//! DOM glue: builds the game surface, wires input listeners and applies
//! renders. The single [`GameState`] lives in a thread-local cell; every
//! listener borrows it for the duration of one dispatch, so no concurrent
//! mutation is possible.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, window};

use crate::game::{self, Direction, GameState, Step};
use crate::render;

struct App {
    state: GameState,
    /// The outer `<section class="game">`; swapped to the tally on finish.
    section: Element,
    /// The `<tbody>` receiving grid markup.
    cells: Element,
    /// The `<strong data-testid="moveCounter">` inside the progress line.
    counter: Element,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Builds the game surface under `document.body` and installs the input
/// listeners. A previous surface (from an earlier `start_game` call) is
/// torn down first.
pub fn mount(width: u32, height: u32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let state = GameState::new(width, height, game::random_draw)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    if let Some(old) = doc.get_element_by_id("gc-game") {
        old.remove();
    }

    let section = doc.create_element("section")?;
    section.set_id("gc-game");
    section.set_class_name("game");

    let board: HtmlElement = doc.create_element("table")?.dyn_into()?;
    board.set_class_name("board");
    board.set_attribute("tabindex", "0")?;
    board.set_attribute("data-testid", render::GRID_TESTID)?;

    let cells = doc.create_element("tbody")?;
    board.append_child(&cells)?;
    section.append_child(&board)?;

    let progress = doc.create_element("p")?;
    progress.set_class_name("moves");
    progress.set_inner_html(&render::progress(0));
    section.append_child(&progress)?;

    let counter = progress
        .query_selector("strong")?
        .ok_or_else(|| JsValue::from_str("no counter element"))?;

    // On-screen controls: each button feeds the same dispatch path as the
    // keyboard, so both input routes produce identical transitions.
    let pad = doc.create_element("div")?;
    pad.set_class_name("gamepad");
    for dir in [
        Direction::Up,
        Direction::Right,
        Direction::Left,
        Direction::Down,
    ] {
        let button = doc.create_element("button")?;
        button.set_class_name(&format!(
            "gamepad__control gamepad__control--{}",
            render::control_suffix(dir)
        ));
        button.set_inner_html(render::arrow_svg(dir));
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch(dir);
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        pad.append_child(&button)?;
    }
    section.append_child(&pad)?;

    // Keyboard path. Unrecognized keys never reach the state machine.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if let Some(dir) = Direction::from_key(&evt.key()) {
                dispatch(dir);
            }
        }) as Box<dyn FnMut(_)>);
        board.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Clicking anywhere on the surface restores keyboard focus to the board.
    {
        let board_focus = board.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            board_focus.focus().ok();
        }) as Box<dyn FnMut(_)>);
        section.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&section)?;

    clog(&format!("grid-chase: {width}x{height} board ready"));

    cells.set_inner_html(&render::grid_rows(&state));
    if state.is_finished() {
        // A 1x1 board is already complete at construction.
        section.set_inner_html(&render::tally(state.moves()));
    }

    board.focus().ok();

    APP.with(|app| {
        app.replace(Some(App {
            state,
            section,
            cells,
            counter,
        }))
    });

    Ok(())
}

/// Applies one directional input and refreshes the surface. Blocked and
/// post-finish inputs change nothing, so nothing is re-rendered for them.
fn dispatch(dir: Direction) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            match app.state.step(dir) {
                Step::Ignored | Step::Blocked => {}
                Step::Moved | Step::Cleared => {
                    app.cells.set_inner_html(&render::grid_rows(&app.state));
                    app.counter
                        .set_text_content(Some(&app.state.moves().to_string()));
                }
                Step::Completed => {
                    clog(&format!(
                        "grid-chase: all targets cleared in {} moves",
                        app.state.moves()
                    ));
                    app.section.set_inner_html(&render::tally(app.state.moves()));
                }
            }
        }
    });
}
