//! Execution of router commands with a bounded run time

use crate::messages;
use async_trait::async_trait;
use owrt_config::ExecutionConfig;
use std::fmt;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// What to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A fixed command line interpreted by `sh -c`. Only ever built from
    /// constants or operator configuration, never from chat input.
    Shell(String),
    /// A command line for `sh -c` that reads its variable parts from the
    /// positional parameters `$1`, `$2`, ... instead of having them spliced
    /// into the script text.
    Script {
        /// Script text, operator configured
        script: String,
        /// Values bound to `$1` onwards
        args: Vec<String>,
    },
    /// A program started directly with an argument vector. No shell is
    /// involved, so arguments are passed through literally.
    Argv {
        /// Program name or path
        program: String,
        /// Arguments, one element per argument
        args: Vec<String>,
    },
}

impl Invocation {
    /// Shell command line
    pub fn shell(command: impl Into<String>) -> Self {
        Self::Shell(command.into())
    }

    /// Direct program invocation
    pub fn argv(program: impl Into<String>, args: Vec<String>) -> Self {
        Self::Argv {
            program: program.into(),
            args,
        }
    }

    /// Script with positional parameters
    pub fn script(script: impl Into<String>, args: Vec<String>) -> Self {
        Self::Script {
            script: script.into(),
            args,
        }
    }

    fn to_command(&self) -> Command {
        match self {
            Self::Shell(line) => shell_command(line),
            Self::Script { script, args } => {
                let mut command = shell_command(script);
                // `$0` for the script, then the positional parameters.
                command.arg("sh").args(args);
                command
            }
            Self::Argv { program, args } => {
                let mut command = Command::new(program);
                command.args(args);
                command
            }
        }
    }
}

/// `sh -c` with stderr merged into stdout for the whole script, so both
/// streams stay interleaved as written.
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(format!("exec 2>&1; {line}"));
    command
}

fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let words: Vec<&str> = words.into_iter().collect();
    shlex::try_join(words.iter().copied()).unwrap_or_else(|_| format!("{words:?}"))
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shell(line) => f.write_str(line),
            Self::Script { script, args } => {
                write!(f, "{script} -- {}", join_words(args.iter().map(String::as_str)))
            }
            Self::Argv { program, args } => f.write_str(&join_words(
                std::iter::once(program.as_str()).chain(args.iter().map(String::as_str)),
            )),
        }
    }
}

/// Result of running an [`Invocation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Trimmed, non-empty combined output
    Output(String),
    /// The command printed nothing (or only whitespace)
    Empty,
    /// The command was killed after running past the timeout
    TimedOut,
    /// The command could not be started or awaited
    Failed(String),
}

impl RunOutcome {
    /// Classifies raw combined output
    pub fn from_output(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Output(trimmed.to_string())
        }
    }

    /// Text shown to the user
    pub fn into_text(self) -> String {
        match self {
            Self::Output(text) => text,
            Self::Empty => messages::EMPTY_OUTPUT.to_string(),
            Self::TimedOut => messages::TIMED_OUT.to_string(),
            Self::Failed(error) => messages::spawn_failed(&error),
        }
    }
}

/// Runs invocations on behalf of command handlers
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs one invocation to completion or timeout
    async fn run(&self, invocation: &Invocation) -> RunOutcome;
}

/// Production runner backed by `tokio::process`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    timeout: Duration,
}

impl ShellRunner {
    /// Creates a runner that kills commands after `timeout`
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Creates a runner from the execution settings
    pub const fn from_config(config: &ExecutionConfig) -> Self {
        Self::new(config.timeout)
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, invocation: &Invocation) -> RunOutcome {
        let mut command = invocation.to_command();
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(command = %invocation, "Running command");
        let started = Instant::now();

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!(command = %invocation, error = %e, "Failed to start command");
                return RunOutcome::Failed(e.to_string());
            }
        };

        // Dropping the pending future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                warn!(command = %invocation, error = %e, "Failed to collect command output");
                return RunOutcome::Failed(e.to_string());
            }
            Err(_) => {
                warn!(
                    command = %invocation,
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Command timed out"
                );
                return RunOutcome::TimedOut;
            }
        };

        info!(
            command = %invocation,
            status = %output.status,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Command finished"
        );

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&stderr);
        }

        RunOutcome::from_output(&text)
    }
}
