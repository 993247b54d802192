use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{debug, warn};

/// Redraw and clock-check interval.
pub const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

impl AppEvent {
    /// Maps a terminal event; key releases and repeats are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
            _ => None,
        }
    }
}

/// Where terminal events come from.
trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Reads terminal events on a background thread and emits a tick every
/// `tick_rate`, whether or not input keeps arriving.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || pump(&mut TerminalEvents, &tx, tick_rate));
        Self { rx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

/// Forwards events until the receiver goes away. A failing poll backs off for
/// a tick before trying again.
fn pump(source: &mut impl EventSource, tx: &mpsc::Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let next = match source.poll(timeout) {
            Ok(true) => match source.read() {
                Ok(event) => AppEvent::from_terminal(event),
                Err(err) => {
                    warn!(error = %err, "failed to read terminal event");
                    None
                }
            },
            Ok(false) => None,
            Err(err) => {
                warn!(error = %err, "failed to poll terminal events");
                thread::sleep(tick_rate);
                None
            }
        };

        let due = last_tick.elapsed() >= tick_rate;
        if due {
            last_tick = Instant::now();
        }
        for event in next.into_iter().chain(due.then_some(AppEvent::Tick)) {
            if tx.send(event).is_err() {
                debug!("event receiver dropped, stopping input thread");
                return;
            }
        }
    }
}
