use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use std::cell::Cell;
use std::io;
use std::rc::Rc;
use tracing::info;
use tui::{backend::CrosstermBackend, Terminal};

use todo_tui::{
    app::{self, Action, TodoState},
    config::Config,
    event::{spawn_input_thread, Event},
    logging,
    redux::Store,
    ui::{self, Outcome, ViewState},
};

fn run<B: tui::backend::Backend>(
    terminal: &mut Terminal<B>,
    store: &Store<TodoState, Action>,
    config: &Config,
) -> todo_tui::Result<()> {
    let dirty = Rc::new(Cell::new(true));

    let redraw = Rc::clone(&dirty);
    let subscription = store.subscribe(move || redraw.set(true));

    let rx = spawn_input_thread(config.tick_rate());
    let mut view = ViewState::default();

    terminal.clear()?;

    loop {
        if dirty.replace(false) {
            let state = store.get_state();
            terminal.draw(|rect| ui::draw(rect, &state, &view))?;
        }

        match rx.recv()? {
            Event::Input(key) => {
                let state = store.get_state();

                // View-local edits (typing, moving the cursor) also need a redraw.
                dirty.set(true);

                match ui::handle_key(&mut view, &state, key) {
                    Outcome::Dispatch(action) => store.dispatch(action),
                    Outcome::Quit => break,
                    Outcome::Nothing => {}
                }
            }
            Event::Tick => {}
        }
    }

    subscription.unsubscribe();

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    logging::init_tracing(&config);

    let store = app::create_store();

    info!(state = %serde_json::to_string(&*store.get_state())?, "store ready");

    let stdout = io::stdout();

    let crossterm_backend = CrosstermBackend::new(stdout);

    let mut terminal = Terminal::new(crossterm_backend)?;

    enable_raw_mode()?;

    let result = run(&mut terminal, &store, &config);

    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result?;

    let final_state = serde_json::to_string_pretty(&*store.get_state())?;

    info!(todos = store.get_state().todos.len(), "exiting");

    if config.print_state_on_exit {
        println!("{}", final_state);
    }

    Ok(())
}
