//! Error types for the child process session.

use std::io;

/// Failures of the shell child process and its pipes.
///
/// None of these escape the console session: the orchestrator turns each one
/// into a colored scrollback line.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Shell input pipe closed: {source}")]
    PipeClosed {
        /// Whether the automatic restart succeeded
        restarted: bool,
        #[source]
        source: io::Error,
    },

    #[error("Shell is not running")]
    NotRunning,

    #[error("Shell {0} stream was not captured")]
    MissingStream(&'static str),

    #[error("Error reading shell {stream}: {source}")]
    ReadLoop {
        stream: &'static str,
        #[source]
        source: io::Error,
    },
}
