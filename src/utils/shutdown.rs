//! Shutdown detection for the console host.
//!
//! Detects termination conditions so the host loop can exit and the shell
//! child is torn down:
//! - SIGINT via the ctrlc handler (raw mode turns Ctrl+C into a key press,
//!   so this only fires for signals sent from outside)
//! - SIGHUP (terminal hangup) via signal_hook
//! - Parent process death (terminal force-closed, reparented to init/subreaper)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "please exit" flag plus orphan detection.
#[derive(Debug, Clone)]
pub struct ShutdownGuard {
    requested: Arc<AtomicBool>,
    #[cfg(unix)]
    initial_ppid: u32,
}

impl Default for ShutdownGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownGuard {
    /// Snapshot the current parent PID for later orphan detection.
    pub fn new() -> Self {
        Self {
            requested: Arc::new(AtomicBool::new(false)),
            #[cfg(unix)]
            initial_ppid: parent_pid(),
        }
    }

    /// Register SIGINT and SIGHUP handlers that set the shutdown flag.
    ///
    /// Safe to call more than once; a second ctrlc registration is ignored.
    pub fn register_signal_handlers(&self) {
        let flag = Arc::clone(&self.requested);
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .ok();

        #[cfg(unix)]
        {
            use signal_hook::flag::register;
            let _ = register(libc::SIGHUP, Arc::clone(&self.requested));
        }
    }

    /// Ask the host loop to exit.
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    /// Whether a shutdown was requested by signal or [`request`](Self::request).
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Check all termination conditions: signal flag or parent death.
    pub fn should_exit(&self) -> bool {
        self.is_requested() || self.is_orphaned()
    }

    /// Detect parent death by comparing the current ppid against the snapshot.
    #[cfg(unix)]
    fn is_orphaned(&self) -> bool {
        parent_pid() != self.initial_ppid
    }

    #[cfg(not(unix))]
    fn is_orphaned(&self) -> bool {
        false
    }
}

#[cfg(unix)]
fn parent_pid() -> u32 {
    // SAFETY: getppid has no preconditions and cannot fail.
    unsafe { libc::getppid() as u32 }
}
