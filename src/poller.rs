//! Periodic refresh of a value on a worker thread.
//!
//! The poller belongs to the screen that shows the value; dropping it stops the
//! worker, so nothing keeps polling after the screen is left.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error};

pub struct Poller<T> {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    receiver: mpsc::Receiver<T>,
}

impl<T: Send + 'static> Poller<T> {
    /// Calls `fetch` right away and then every `interval` until stopped.
    pub fn start<F>(name: &str, interval: Duration, fetch: F) -> Self
    where
        F: Fn() -> T + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                while !stop_flag.load(Ordering::Acquire) {
                    if sender.send(fetch()).is_err() {
                        break;
                    }
                    let deadline = Instant::now() + interval;
                    while !stop_flag.load(Ordering::Acquire) {
                        let now = Instant::now();
                        if now >= deadline {
                            break;
                        }
                        thread::park_timeout(deadline - now);
                    }
                }
            })
            .map_err(|e| error!("Could not start {name} poller: {e}"))
            .ok();

        Self {
            stop,
            handle,
            receiver,
        }
    }

    /// Most recent value delivered since the last call.
    pub fn latest(&mut self) -> Option<T> {
        self.receiver.try_iter().last()
    }
}

impl<T> Poller<T> {
    /// True until the worker thread has returned.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Asks the worker to exit and wakes it from its wait.
    /// A fetch in flight is not interrupted; the worker exits right after it.
    pub fn stop(&mut self) {
        if self.stop.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(handle) = &self.handle {
            handle.thread().unpark();
            debug!("poller stopped");
        }
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
