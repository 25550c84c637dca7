//! The shell child process and the threads that drain its output.
//!
//! One shell runs at a time. Its standard output and standard error are each
//! read line by line on a dedicated thread and appended to the shared
//! scrollback; standard input is written from the foreground loop.
//!
//! Every spawn gets a fresh `active` flag shared with its two readers.
//! Stopping clears the flag and kills the process, which closes the pipes and
//! lets the readers fall out of their blocking read. Readers of an old process
//! can never write under the flag of a newer one. A shell that exits on its
//! own keeps its flag set so the readers still drain whatever it printed last.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use super::error::ProcessError;
use super::sanitize::plain_text;
use super::scrollback::{LineTag, ScrollbackBuffer};

/// Program and arguments used to launch the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// PowerShell reading commands from stdin on Windows, `sh` elsewhere.
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Self::new(
                "powershell",
                ["-NoLogo", "-NoProfile", "-NonInteractive", "-Command", "-"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            )
        } else {
            Self::new("sh", Vec::new())
        }
    }
}

impl Default for ShellCommand {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Lifecycle owner of the shell process.
pub struct ChildProcessSession {
    shell: ShellCommand,
    working_dir: PathBuf,
    scrollback: ScrollbackBuffer,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    active: Arc<AtomicBool>,
    readers: Vec<JoinHandle<()>>,
}

impl ChildProcessSession {
    /// Prepare a session; nothing is spawned until [`start`](Self::start).
    pub fn new(shell: ShellCommand, working_dir: impl Into<PathBuf>, scrollback: ScrollbackBuffer) -> Self {
        Self {
            shell,
            working_dir: working_dir.into(),
            scrollback,
            child: None,
            stdin: None,
            active: Arc::new(AtomicBool::new(false)),
            readers: Vec::new(),
        }
    }

    pub fn shell(&self) -> &ShellCommand {
        &self.shell
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Whether a shell is alive.
    pub fn is_running(&self) -> bool {
        self.child.is_some()
    }

    /// Process id of the current shell.
    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Spawn the shell, replacing any previous one.
    pub fn start(&mut self) -> Result<(), ProcessError> {
        self.stop();

        let mut cmd = Command::new(&self.shell.program);
        cmd.args(&self.shell.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        configure_platform(&mut cmd);

        let mut child = cmd.spawn().map_err(|source| ProcessError::Spawn {
            program: self.shell.program.clone(),
            source,
        })?;

        let active = Arc::new(AtomicBool::new(true));
        let readers = match self.attach(&mut child, &active) {
            Ok(readers) => readers,
            Err(e) => {
                active.store(false, Ordering::SeqCst);
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        };

        info!(
            program = %self.shell.program,
            pid = child.id(),
            dir = %self.working_dir.display(),
            "Shell started"
        );
        self.active = active;
        self.readers = readers;
        self.child = Some(child);
        Ok(())
    }

    /// Take the pipes from a fresh child and start both readers.
    fn attach(&mut self, child: &mut Child, active: &Arc<AtomicBool>) -> Result<Vec<JoinHandle<()>>, ProcessError> {
        let stdin = child.stdin.take().ok_or(ProcessError::MissingStream("input"))?;
        let stdout = child.stdout.take().ok_or(ProcessError::MissingStream("output"))?;
        let stderr = child.stderr.take().ok_or(ProcessError::MissingStream("error"))?;

        let spawn_err = |source| ProcessError::Spawn {
            program: self.shell.program.clone(),
            source,
        };
        let out = spawn_reader("output", stdout, LineTag::Output, active, &self.scrollback)
            .map_err(spawn_err)?;
        let err = spawn_reader("error", stderr, LineTag::Error, active, &self.scrollback)
            .map_err(spawn_err)?;

        self.stdin = Some(stdin);
        Ok(vec![out, err])
    }

    /// Write one command line to the shell.
    ///
    /// A failed write means the pipe is unusable: the shell is restarted once
    /// and `PipeClosed` is returned so the caller can tell the user. The
    /// command itself is not replayed.
    pub fn send(&mut self, line: &str) -> Result<(), ProcessError> {
        if !self.is_running() {
            return Err(ProcessError::NotRunning);
        }
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(ProcessError::NotRunning);
        };

        let written = stdin
            .write_all(line.as_bytes())
            .and_then(|()| stdin.write_all(b"\n"))
            .and_then(|()| stdin.flush());

        match written {
            Ok(()) => {
                debug!(command = line, "Sent to shell");
                Ok(())
            }
            Err(source) => {
                warn!(error = %source, "Shell input pipe failed; restarting shell");
                let restarted = match self.start() {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(error = %e, "Shell restart failed");
                        false
                    }
                };
                Err(ProcessError::PipeClosed { restarted, source })
            }
        }
    }

    /// Check whether the shell has exited on its own.
    ///
    /// On exit the session stops running and a warning line is appended.
    pub fn poll_exit(&mut self) -> Option<ExitStatus> {
        let child = self.child.as_mut()?;
        match child.try_wait() {
            Ok(Some(status)) => {
                info!(%status, "Shell exited");
                self.stdin = None;
                self.child = None;
                self.readers.clear();
                self.scrollback.append(
                    &format!("Shell exited ({}). It will restart on the next command.", status),
                    LineTag::Warning,
                    true,
                );
                Some(status)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to poll shell status");
                None
            }
        }
    }

    /// Kill the shell and release its pipes.
    ///
    /// Readers notice within one line read; they are detached rather than
    /// joined because a grandchild holding the pipe open could block them.
    pub fn stop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        self.stdin = None;
        if let Some(mut child) = self.child.take() {
            let pid = child.id();
            if let Err(e) = child.kill() {
                debug!(pid, error = %e, "Shell already gone");
            }
            let _ = child.wait();
            info!(pid, "Shell stopped");
        }
        self.readers.clear();
    }
}

impl Drop for ChildProcessSession {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_reader<R>(
    stream: &'static str,
    source: R,
    tag: LineTag,
    active: &Arc<AtomicBool>,
    scrollback: &ScrollbackBuffer,
) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    let active = Arc::clone(active);
    let scrollback = scrollback.clone();
    thread::Builder::new()
        .name(format!("shell-{}", stream))
        .spawn(move || read_loop(stream, source, tag, &active, &scrollback))
}

/// Forward lines from `source` to the scrollback until EOF or stop.
fn read_loop<R: Read>(
    stream: &'static str,
    source: R,
    tag: LineTag,
    active: &AtomicBool,
    scrollback: &ScrollbackBuffer,
) {
    let mut reader = BufReader::new(source);
    let mut buf = Vec::new();

    while active.load(Ordering::SeqCst) {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if !active.load(Ordering::SeqCst) {
                    break;
                }
                let raw = String::from_utf8_lossy(&buf);
                let line = plain_text(raw.trim_end_matches(['\n', '\r']));
                scrollback.append(&line, tag, false);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                let err = ProcessError::ReadLoop { stream, source };
                warn!(error = %err, "Reader loop fault");
                if active.load(Ordering::SeqCst) {
                    scrollback.append(&err.to_string(), LineTag::Failure, true);
                }
                break;
            }
        }
    }
    debug!(stream, "Reader loop finished");
}

#[cfg(windows)]
fn configure_platform(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn configure_platform(cmd: &mut Command) {
    // Ask locale-aware tools for UTF-8 output when the host has no locale.
    if std::env::var_os("LANG").is_none() && std::env::var_os("LC_ALL").is_none() {
        cmd.env("LANG", "C.UTF-8");
    }
}
