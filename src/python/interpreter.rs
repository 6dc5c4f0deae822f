//! Python interpreter discovery.
//!
//! The checker shells out to the interpreter that the course
//! environment put on PATH. Discovery iterates PATH entries directly
//! rather than calling `which`, which is sometimes a shell builtin
//! with inconsistent behavior across systems.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{Result, TrestleError};
use crate::shell::{execute, CommandOptions, CommandResult};

/// Interpreter names tried during discovery, in order.
const CANDIDATE_NAMES: &[&str] = &["python", "python3"];

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?)").unwrap());

/// A resolved Python interpreter.
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: PathBuf,
}

impl Interpreter {
    /// Wrap an already-known interpreter path.
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Resolve the interpreter to use.
    ///
    /// An explicit override wins; a bare name is looked up on PATH,
    /// anything with a path separator is taken as-is. Without an
    /// override, discovery tries `python` then `python3`.
    pub fn resolve(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => {
                if path.components().count() > 1 {
                    if path.is_file() {
                        Ok(Self::new(path.to_path_buf()))
                    } else {
                        Err(TrestleError::InterpreterNotFound {
                            message: format!("{} does not exist", path.display()),
                        })
                    }
                } else {
                    let name = path.to_string_lossy();
                    resolve_tool_path(&name, &parse_system_path())
                        .map(Self::new)
                        .ok_or_else(|| TrestleError::InterpreterNotFound {
                            message: format!("'{}' is not on PATH", name),
                        })
                }
            }
            None => Self::discover(),
        }
    }

    /// Find an interpreter on PATH.
    pub fn discover() -> Result<Self> {
        let entries = parse_system_path();
        for name in CANDIDATE_NAMES {
            if let Some(path) = resolve_tool_path(name, &entries) {
                return Ok(Self::new(path));
            }
        }
        Err(TrestleError::InterpreterNotFound {
            message: format!("tried {} on PATH", CANDIDATE_NAMES.join(", ")),
        })
    }

    /// Path to the interpreter binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Interpreter version, if `--version` reports one.
    pub fn version(&self) -> Option<String> {
        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };
        let result = execute(&self.program, &["--version"], &options).ok()?;
        parse_version(&result.stdout).or_else(|| parse_version(&result.stderr))
    }

    /// Run a code snippet with `python -c`, capturing output.
    ///
    /// Extra arguments land in the snippet's `sys.argv`.
    pub fn run_code(&self, code: &str, args: &[&str]) -> Result<CommandResult> {
        let mut full_args = vec!["-c", code];
        full_args.extend_from_slice(args);

        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };
        execute(&self.program, &full_args, &options)
    }
}

fn parse_version(text: &str) -> Option<String> {
    VERSION_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
