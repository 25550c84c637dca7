//! Directory-change guard for commands forwarded to the shell.
//!
//! The console keeps the shell inside a single root directory. Rather than
//! tracking the shell's real working directory (which the console cannot
//! observe through a pipe), every submitted line is inspected on its own and
//! directory-changing commands whose target could leave the root are refused.
//!
//! The check fails closed: anything that cannot be resolved is blocked.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// Default number of `..` levels a relative target may climb.
pub const DEFAULT_MAX_PARENT_DEPTH: usize = 2;

/// Commands that change the working directory (compared case-insensitively).
const DIRECTORY_VERBS: &[&str] = &["cd", "chdir", "pushd", "set-location", "sl"];

/// Characters that make a shell rewrite the target before using it
/// (variables, substitutions, brace expansion, cmd.exe `%VAR%`).
const EXPANSION_CHARS: &[char] = &['$', '`', '%', '(', '{'];

/// Stateless validator of directory-change commands.
#[derive(Debug, Clone)]
pub struct PathSandbox {
    root: PathBuf,
    max_parent_depth: usize,
}

impl PathSandbox {
    /// Create a sandbox rooted at `root`.
    ///
    /// The root is canonicalized when it exists so that symlinked roots still
    /// compare equal to resolved targets.
    pub fn new(root: impl Into<PathBuf>, max_parent_depth: usize) -> Self {
        let root = root.into();
        let root = std::fs::canonicalize(&root).unwrap_or(root);
        Self {
            root,
            max_parent_depth,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_parent_depth(&self) -> usize {
        self.max_parent_depth
    }

    /// Whether `raw_command` must not be forwarded to the shell.
    ///
    /// Compound lines (`;`, `&&`, `||`, `|`, `&`) are blocked if any segment
    /// is.
    pub fn is_blocked(&self, raw_command: &str) -> bool {
        let blocked = split_segments(raw_command)
            .into_iter()
            .any(|segment| self.is_segment_blocked(segment));
        if blocked {
            debug!(command = raw_command, root = %self.root.display(), "Sandbox blocked command");
        }
        blocked
    }

    fn is_segment_blocked(&self, segment: &str) -> bool {
        let Some(target) = directory_target(segment) else {
            return false;
        };

        let target = unquote(target.trim());
        // Bare `cd`, `cd ~...` and `cd -` all go somewhere we cannot see.
        if target.is_empty() || target.starts_with('~') || target == "-" {
            return true;
        }
        if target.contains(EXPANSION_CHARS) {
            return true;
        }
        if is_filesystem_root(target) {
            return true;
        }
        if is_absolute_target(target) {
            return !self.contains(Path::new(target));
        }
        self.climbs_too_far(target)
    }

    /// Resolve an absolute path and test that it lies inside the root.
    fn contains(&self, target: &Path) -> bool {
        match std::fs::canonicalize(target) {
            Ok(resolved) => resolved.starts_with(&self.root),
            Err(_) => false,
        }
    }

    /// Walk a relative target and check how far above the start it ever gets.
    fn climbs_too_far(&self, target: &str) -> bool {
        let mut depth: isize = 0;
        let mut lowest: isize = 0;
        for part in target.split(['/', '\\']) {
            match part {
                "" | "." => {}
                ".." => {
                    depth -= 1;
                    lowest = lowest.min(depth);
                }
                _ => depth += 1,
            }
        }
        lowest.unsigned_abs() > self.max_parent_depth
    }
}

/// Split a command line on shell separators.
fn split_segments(line: &str) -> Vec<&str> {
    line.split(['&', '|', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// If `segment` is a directory change, return its (possibly empty) target.
fn directory_target(segment: &str) -> Option<&str> {
    let segment = segment.trim();
    let verb_end = segment
        .find(|c: char| c.is_whitespace())
        .unwrap_or(segment.len());
    let verb = &segment[..verb_end];
    let lower = verb.to_ascii_lowercase();

    if DIRECTORY_VERBS.contains(&lower.as_str()) {
        return Some(strip_switches(segment[verb_end..].trim()));
    }

    // cmd.exe accepts `cd..` and `cd\` without a separating space.
    if lower.len() > 2 && lower.starts_with("cd") {
        let rest = &verb[2..];
        if rest.starts_with('.') || rest.starts_with('\\') || rest.starts_with('/') {
            return Some(segment[2..].trim());
        }
    }
    None
}

/// Drop `/d` (cmd.exe) and `-Path`/`-LiteralPath` (PowerShell) switches.
fn strip_switches(args: &str) -> &str {
    let mut rest = args;
    loop {
        let token_end = rest
            .find(|c: char| c.is_whitespace())
            .unwrap_or(rest.len());
        let token = rest[..token_end].to_ascii_lowercase();
        if matches!(token.as_str(), "/d" | "-path" | "-literalpath") {
            rest = rest[token_end..].trim_start();
        } else {
            return rest;
        }
    }
}

fn unquote(s: &str) -> &str {
    let s = s.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return inner.trim();
        }
    }
    s
}

/// `/`, `\`, `C:`, `C:\` and `C:/`.
fn is_filesystem_root(target: &str) -> bool {
    if target.chars().all(|c| c == '/' || c == '\\') {
        return true;
    }
    let bytes = target.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && target[2..].chars().all(|c| c == '/' || c == '\\')
}

fn is_absolute_target(target: &str) -> bool {
    let path = Path::new(target);
    if path.is_absolute() || path.has_root() {
        return true;
    }
    if matches!(path.components().next(), Some(Component::Prefix(_))) {
        return true;
    }
    // Drive-qualified paths are absolute for our purposes on every platform.
    let bytes = target.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
