//! Input module - key mapping and the background input listener.
//!
//! The listener runs on its own thread, independent of the tick cadence, and
//! publishes the most recent unconsumed command into a single-slot mailbox.
//! The simulation loop drains the slot non-blockingly once per tick; a late
//! command overwrites an earlier one that was never consumed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Command;

/// Map keyboard input to game commands. Unrecognized keys map to nothing
/// and polling simply continues.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::HardDrop),
        KeyCode::Char(' ') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Capacity-1 mailbox between the listener thread and the simulation loop.
#[derive(Debug, Default)]
pub struct Mailbox {
    slot: Mutex<Option<Command>>,
}

impl Mailbox {
    /// Publish a command, replacing any unconsumed one.
    pub fn put(&self, command: Command) {
        *self.lock() = Some(command);
    }

    /// Take the pending command, if any.
    pub fn take(&self) -> Option<Command> {
        self.lock().take()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Command>> {
        // A poisoned slot just means the listener panicked mid-store; the
        // stored Option is still valid either way.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// How long one poll iteration waits for an event before re-checking the
/// stop/suspend flags.
const POLL_INTERVAL: Duration = Duration::from_millis(15);

/// Suspension handshake between the listener and the simulation thread.
///
/// `pause` returns only after the listener has acknowledged the request and
/// parked, so a key pressed after `pause` returns can never be consumed by a
/// poll that was already in flight when the flag went up.
#[derive(Debug, Default)]
struct PauseGate {
    suspended: AtomicBool,
    parked: AtomicBool,
}

impl PauseGate {
    /// Caller side: request suspension and wait for the acknowledgement.
    fn pause(&self) {
        self.suspended.store(true, Ordering::SeqCst);
        while !self.parked.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(1));
        }
    }

    fn unpause(&self) {
        self.suspended.store(false, Ordering::SeqCst);
    }

    /// Listener side, checked once per iteration: true while the listener
    /// should idle instead of reading events. Acknowledges in the same step.
    fn should_park(&self) -> bool {
        let suspended = self.suspended.load(Ordering::SeqCst);
        self.parked.store(suspended, Ordering::SeqCst);
        suspended
    }

    /// Listener side, on exit: leave the gate permanently acknowledged so a
    /// pending or future `pause` cannot wait on a thread that is gone.
    fn retire(&self) {
        self.parked.store(true, Ordering::SeqCst);
    }
}

/// Background key listener feeding the mailbox.
///
/// `suspend` parks the thread without reading events so the main thread can
/// consume keys directly (confirmation dialogs). Dropping the controller
/// stops and joins the thread.
pub struct InputController {
    mailbox: Arc<Mailbox>,
    gate: Arc<PauseGate>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputController {
    pub fn spawn() -> Result<Self> {
        let mailbox = Arc::new(Mailbox::default());
        let gate = Arc::new(PauseGate::default());
        let stop = Arc::new(AtomicBool::new(false));

        let handle = thread::Builder::new().name("input-listener".into()).spawn({
            let mailbox = Arc::clone(&mailbox);
            let gate = Arc::clone(&gate);
            let stop = Arc::clone(&stop);
            move || listen(&mailbox, &gate, &stop)
        })?;

        Ok(Self {
            mailbox,
            gate,
            stop,
            handle: Some(handle),
        })
    }

    /// Non-blocking check for the latest unconsumed command.
    pub fn poll(&self) -> Option<Command> {
        self.mailbox.take()
    }

    /// Stop reading events until `resume`. Blocks until the listener has
    /// parked, then discards any pending command, so neither an in-flight
    /// poll nor a stale keystroke can leak into the dialog that follows.
    pub fn suspend(&self) {
        self.gate.pause();
        self.mailbox.take();
    }

    pub fn resume(&self) {
        self.mailbox.take();
        self.gate.unpause();
    }
}

impl Drop for InputController {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn listen(mailbox: &Mailbox, gate: &PauseGate, stop: &AtomicBool) {
    loop {
        if stop.load(Ordering::SeqCst) {
            break;
        }
        if gate.should_park() {
            thread::sleep(POLL_INTERVAL);
            continue;
        }
        match event::poll(POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = map_key(key) {
                        mailbox.put(command);
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            },
            Ok(false) => {}
            Err(_) => break,
        }
    }
    gate.retire();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(Command::HardDrop)
        );
    }

    #[test]
    fn test_restart_and_quit_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::Restart)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), None);
    }

    #[test]
    fn test_mailbox_late_command_overwrites() {
        let mailbox = Mailbox::default();
        mailbox.put(Command::MoveLeft);
        mailbox.put(Command::MoveRight);
        assert_eq!(mailbox.take(), Some(Command::MoveRight));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn test_pause_waits_for_listener_acknowledgement() {
        let gate = Arc::new(PauseGate::default());
        let stop = Arc::new(AtomicBool::new(false));

        // Stand-in for the listener loop: same gate protocol, no terminal.
        let worker = thread::spawn({
            let gate = Arc::clone(&gate);
            let stop = Arc::clone(&stop);
            move || {
                while !stop.load(Ordering::SeqCst) {
                    thread::sleep(Duration::from_millis(1));
                    let _ = gate.should_park();
                }
                gate.retire();
            }
        });

        // pause must not return before the worker has parked.
        gate.pause();
        assert!(gate.parked.load(Ordering::SeqCst));

        gate.unpause();
        stop.store(true, Ordering::SeqCst);
        worker.join().unwrap();
    }

    #[test]
    fn test_pause_returns_after_listener_retires() {
        let gate = PauseGate::default();
        gate.retire();
        // A retired gate acknowledges immediately; pause must not hang.
        gate.pause();
    }
}
