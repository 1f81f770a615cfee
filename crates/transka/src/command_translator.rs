//! Translator backed by an external command.
//!
//! Any program that reads text on stdin and writes the translation to stdout
//! can act as the backend, e.g. a `trans` or `deepl` CLI or a small script
//! around an HTTP API.

use crate::config::TranslatorConfig;

use std::{
    io::{self, Read, Write},
    panic::Location,
    process::{Child, Command, ExitStatus, Stdio},
    thread::JoinHandle,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};
use transka_core::{CoreError, CoreResult, Translator};

const SOURCE_PLACEHOLDER: &str = "{source}";
const TARGET_PLACEHOLDER: &str = "{target}";

/// How often a running command is checked for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs the configured command once per request.
///
/// The command line is re-read on every request, so reloaded settings apply
/// to the next translation. A command still running after `timeout` is
/// killed.
pub struct CommandTranslator {
    config: watch::Receiver<TranslatorConfig>,
    timeout: Duration,
}

impl CommandTranslator {
    /// Create a translator following `config`, killing commands that run
    /// longer than `timeout`.
    pub fn new(config: watch::Receiver<TranslatorConfig>, timeout: Duration) -> Self {
        Self { config, timeout }
    }
}

impl Translator for CommandTranslator {
    #[track_caller]
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> CoreResult<String> {
        let config = self.config.borrow().clone();
        if !config.is_configured() {
            return Err(CoreError::TranslatorNotConfigured {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let program = config.command.trim();
        let args = expand_args(&config.args, source_lang, target_lang);
        debug!(program, ?args, "Running translation command");

        let run_error = |e: io::Error| CoreError::Backend {
            reason: format!("Failed to run '{program}': {e}"),
            location: ErrorLocation::from(Location::caller()),
        };

        let mut child = Command::new(program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CoreError::Backend {
                reason: format!("Failed to start '{program}': {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // Every pipe gets its own thread so a command that writes before it
        // has read everything cannot deadlock.
        if let Some(mut stdin) = child.stdin.take() {
            let input = text.to_string();
            std::thread::spawn(move || {
                if let Err(e) = stdin.write_all(input.as_bytes()) {
                    debug!(error = %e, "Command closed stdin early");
                }
            });
        }
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let Some(status) = wait_with_deadline(&mut child, self.timeout).map_err(run_error)? else {
            // Readers are left behind; they end once the pipes close.
            warn!(program, timeout_ms = self.timeout.as_millis(), "Translation command killed");
            return Err(CoreError::Timeout {
                after: self.timeout,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let stdout = collect(stdout).map_err(run_error)?;
        let stderr = collect(stderr).map_err(run_error)?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("'{program}' exited with {status}")
            } else {
                stderr
            };
            return Err(CoreError::Backend {
                reason,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let translated = String::from_utf8(stdout).map_err(|e| CoreError::MalformedResponse {
            reason: format!("Output is not UTF-8: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let translated = translated.trim();
        if translated.is_empty() {
            return Err(CoreError::MalformedResponse {
                reason: format!("'{program}' printed nothing"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(translated.to_string())
    }

    fn is_configured(&self) -> bool {
        self.config.borrow().is_configured()
    }

    fn service_name(&self) -> &str {
        "command"
    }
}

/// Substitute the language placeholders in every argument.
pub(crate) fn expand_args(args: &[String], source_lang: &str, target_lang: &str) -> Vec<String> {
    args.iter()
        .map(|arg| {
            arg.replace(SOURCE_PLACEHOLDER, source_lang)
                .replace(TARGET_PLACEHOLDER, target_lang)
        })
        .collect()
}

/// Read `pipe` to the end on a separate thread.
fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>> {
    std::thread::spawn(move || {
        let mut buffer = Vec::new();
        pipe.read_to_end(&mut buffer)?;
        Ok(buffer)
    })
}

fn collect(reader: Option<JoinHandle<io::Result<Vec<u8>>>>) -> io::Result<Vec<u8>> {
    match reader {
        Some(handle) => handle
            .join()
            .map_err(|_| io::Error::other("pipe reader panicked"))?,
        None => Ok(Vec::new()),
    }
}

/// Wait for `child` to exit, killing and reaping it once `timeout` passes.
///
/// Returns `None` when the command was killed.
pub(crate) fn wait_with_deadline(
    child: &mut Child,
    timeout: Duration,
) -> io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            if let Err(e) = child.kill() {
                // Exited between the last poll and the kill.
                debug!(error = %e, "Kill after deadline failed");
            }
            child.wait()?;
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
