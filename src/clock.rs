// clock.rs

//! Header clock: one ticker thread per session, stopped on teardown.

use chrono::{DateTime, Local};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Clock {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Calls `on_tick` right away and then once per `period` until stopped.
    pub fn start<F>(period: Duration, mut on_tick: F) -> std::io::Result<Self>
    where
        F: FnMut(DateTime<Local>) + Send + 'static,
    {
        let (stop, rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("clock".to_string())
            .spawn(move || loop {
                let now = Local::now();
                log::trace!("tick {}", format_clock(&now));
                on_tick(now);
                match rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    // stop signal or the owner went away
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;
        Ok(Self { stop: Some(stop), handle: Some(handle) })
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signals the ticker and waits for it. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("clock thread panicked");
            }
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn format_clock(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}
