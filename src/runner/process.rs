use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{CodeCheckerError, Result};

use super::{Invocation, ToolOutput, ToolRunner};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs tools as real child processes resolved through `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemToolRunner;

impl ToolRunner for SystemToolRunner {
    fn is_available(&self, tool: &str) -> bool {
        which::which(tool).is_ok()
    }

    fn run(&self, invocation: &Invocation, timeout: Option<Duration>) -> Result<ToolOutput> {
        debug!(command = %invocation, "spawning tool");

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CodeCheckerError::execution_failed(&invocation.program, e.to_string()))?;

        // Drain both pipes concurrently so a chatty tool cannot block on a full pipe.
        let stdout = spawn_reader(child.stdout.take());
        let stderr = spawn_reader(child.stderr.take());

        match wait_for_exit(&mut child, timeout) {
            Ok(status) => Ok(ToolOutput {
                stdout: join_reader(stdout),
                stderr: join_reader(stderr),
                exit_code: status.code(),
            }),
            Err(reason) => {
                warn!(command = %invocation, %reason, "tool did not complete");
                Err(CodeCheckerError::execution_failed(
                    &invocation.program,
                    reason,
                ))
            }
        }
    }
}

fn spawn_reader<R: Read + Send + 'static>(stream: Option<R>) -> Option<JoinHandle<String>> {
    stream.map(|mut stream| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stream.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

fn wait_for_exit(
    child: &mut Child,
    timeout: Option<Duration>,
) -> std::result::Result<ExitStatus, String> {
    let Some(timeout) = timeout else {
        return child.wait().map_err(|e| e.to_string());
    };

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(format!("timed out after {}s", timeout.as_secs_f64()));
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => return Err(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
