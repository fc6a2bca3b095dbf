use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyEvent};
use tracing::warn;

pub enum Event<I> {
    Input(I),
    Tick,
}

/// Listens for key presses on a separate thread so the render loop never
/// blocks on the terminal. The thread stops when the receiver is dropped.
pub fn spawn_input_thread(tick_rate: Duration) -> Receiver<Event<KeyEvent>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut last_tick = Instant::now();

        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(CEvent::Key(key)) => {
                        if tx.send(Event::Input(key)).is_err() {
                            return;
                        }
                    }
                    Ok(_) => {}
                    Err(err) => {
                        warn!(%err, "failed to read terminal event");
                        return;
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    warn!(%err, "failed to poll terminal events");
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    rx
}
