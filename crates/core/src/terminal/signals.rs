//! Out-of-band handling of termination signals during a raw-mode session.
//!
//! A dedicated listener thread waits for `SIGINT`, `SIGTERM` or `SIGHUP` and
//! runs a cleanup action when one arrives. The action owns everything it
//! needs; the main loop shares nothing mutable with it.
//!
//! signal-hook never uninstalls its handlers, so the default action of the
//! three signals is emulated through a conditional registration that is
//! switched off while at least one watcher is alive.

use std::thread::JoinHandle;

use log::{debug, warn};

use crate::error::Result;

#[cfg(unix)]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(unix)]
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(unix)]
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};

#[cfg(unix)]
const WATCHED_SIGNALS: [i32; 3] = [SIGINT, SIGTERM, SIGHUP];

/// Process-wide switch for the emulated default actions.
#[cfg(unix)]
struct DefaultActions {
    enabled: Option<Arc<AtomicBool>>,
    active_watchers: usize,
}

#[cfg(unix)]
static DEFAULT_ACTIONS: Mutex<DefaultActions> = Mutex::new(DefaultActions {
    enabled: None,
    active_watchers: 0,
});

/// Suspends the default actions for one more watcher, registering them the
/// first time.
#[cfg(unix)]
fn suspend_default_actions() -> Result<()> {
    let mut actions = DEFAULT_ACTIONS.lock().unwrap_or_else(PoisonError::into_inner);

    let enabled = match &actions.enabled {
        Some(enabled) => Arc::clone(enabled),
        None => {
            let enabled = Arc::new(AtomicBool::new(true));
            for signal in WATCHED_SIGNALS {
                signal_hook::flag::register_conditional_default(signal, Arc::clone(&enabled))?;
            }
            actions.enabled = Some(Arc::clone(&enabled));
            enabled
        }
    };

    actions.active_watchers += 1;
    enabled.store(false, Ordering::SeqCst);
    Ok(())
}

#[cfg(unix)]
fn resume_default_actions() {
    let mut actions = DEFAULT_ACTIONS.lock().unwrap_or_else(PoisonError::into_inner);

    actions.active_watchers = actions.active_watchers.saturating_sub(1);
    if actions.active_watchers == 0 {
        if let Some(enabled) = &actions.enabled {
            enabled.store(true, Ordering::SeqCst);
        }
    }
}

/// Whether the three watched signals currently get their default action.
#[cfg(unix)]
pub fn default_actions_enabled() -> bool {
    let actions = DEFAULT_ACTIONS.lock().unwrap_or_else(PoisonError::into_inner);
    match &actions.enabled {
        Some(enabled) => enabled.load(Ordering::SeqCst),
        // Nothing registered yet, so the kernel defaults are still in place
        None => true,
    }
}

pub struct SignalWatcher {
    #[cfg(unix)]
    handle: signal_hook::iterator::Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalWatcher {
    /// Starts the listener. `on_signal` receives the signal number and is
    /// expected to restore the terminal and terminate the process.
    #[cfg(unix)]
    pub fn spawn<F>(on_signal: F) -> Result<Self>
    where
        F: FnOnce(i32) + Send + 'static,
    {
        suspend_default_actions()?;

        match Self::start_listener(on_signal) {
            Ok(watcher) => Ok(watcher),
            Err(e) => {
                resume_default_actions();
                Err(e)
            }
        }
    }

    #[cfg(unix)]
    fn start_listener<F>(on_signal: F) -> Result<Self>
    where
        F: FnOnce(i32) + Send + 'static,
    {
        let mut signals = signal_hook::iterator::Signals::new(WATCHED_SIGNALS)?;
        let handle = signals.handle();

        let thread = std::thread::Builder::new()
            .name("picker-signal-watcher".to_owned())
            .spawn(move || {
                if let Some(signal) = signals.forever().next() {
                    log::info!("Received signal {signal}, restoring terminal");
                    on_signal(signal);
                }
            })?;

        debug!("Signal watcher started");

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }

    #[cfg(not(unix))]
    pub fn spawn<F>(_on_signal: F) -> Result<Self>
    where
        F: FnOnce(i32) + Send + 'static,
    {
        debug!("Signal watcher is not supported on this platform");
        Ok(Self { thread: None })
    }
}

impl Drop for SignalWatcher {
    fn drop(&mut self) {
        #[cfg(unix)]
        self.handle.close();

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Signal watcher thread panicked while stopping");
            }
        }

        #[cfg(unix)]
        resume_default_actions();
    }
}
