//! Periodic flush of the local sinks.
//!
//! File writes are buffered; this thread makes sure they reach disk within one
//! period even when nothing else is being logged.

use crate::internal;
use crate::output::LocalSinks;
use crate::Error;

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to the running flush thread. Dropping it stops and joins the thread.
#[derive(Debug)]
pub struct FlushScheduler {
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FlushScheduler {
    /// Spawns the thread. It flushes `sinks` every `period` under the same
    /// lock the write path uses.
    ///
    /// # Errors
    /// [`Error::Spawn`] if the OS refuses the thread.
    pub fn start(sinks: Arc<Mutex<LocalSinks>>, period: Duration) -> Result<Self, Error> {
        let (stop, stopped) = mpsc::channel::<()>();

        let thread = thread::Builder::new()
            .name("daqlog-flush".into())
            .spawn(move || {
                internal::debug("FLUSH", &format!("Flushing every {period:?}"));
                loop {
                    match stopped.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            let mut sinks = sinks.lock().unwrap_or_else(PoisonError::into_inner);
                            if let Err(e) = sinks.flush() {
                                internal::error("FLUSH", &format!("Periodic flush failed: {e}"));
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                internal::debug("FLUSH", "Flush thread stopped");
            })
            .map_err(Error::Spawn)?;

        Ok(Self {
            stop: Some(stop),
            thread: Some(thread),
        })
    }

    /// Signals the thread and waits for it. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.thread.take()
            && handle.join().is_err()
        {
            internal::error("FLUSH", "Flush thread panicked");
        }
    }
}

impl Drop for FlushScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
