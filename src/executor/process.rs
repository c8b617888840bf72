//! Child-process executor

use super::{classify, PuzzleExecutor, RunReport};
use crate::error::{AocError, AocResult};
use crate::runner::RUNNER_COMMAND;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tracing::debug;

/// Runs `<program> [leading args] __runner <runner>` for each runner
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    program: PathBuf,
    leading_args: Vec<OsString>,
}

impl ProcessExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Executor that re-invokes the running binary
    pub fn current() -> AocResult<Self> {
        std::env::current_exe()
            .map(Self::new)
            .map_err(|e| AocError::io("locating the aoc executable", e))
    }

    /// Arguments placed before the runner subcommand
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    fn command(&self, runner: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .arg(RUNNER_COMMAND)
            .arg(runner)
            .kill_on_drop(true);
        cmd
    }

    fn describe(&self, runner: &Path) -> String {
        format!(
            "{} {} {}",
            self.program.display(),
            RUNNER_COMMAND,
            runner.display()
        )
    }
}

#[async_trait]
impl PuzzleExecutor for ProcessExecutor {
    async fn run_interactive(&self, runner: &Path) -> AocResult<RunReport> {
        debug!("Executing interactively: {}", self.describe(runner));

        // stdout is piped so the regression line can be classified; it is
        // echoed chunk by chunk, so output without a newline shows up at once
        let mut child = self
            .command(runner)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| AocError::command_failed(self.describe(runner), e))?;

        let stdout = match child.stdout.take() {
            Some(pipe) => tee_lines(pipe, &mut tokio::io::stdout())
                .await
                .map_err(|e| AocError::io("reading runner output", e))?,
            None => Vec::new(),
        };

        let status = child
            .wait()
            .await
            .map_err(|e| AocError::command_failed(self.describe(runner), e))?;

        Ok(RunReport {
            status: classify(exit_failure(status), &stdout, &[]),
            stdout,
        })
    }

    async fn run_captured(&self, runner: &Path) -> RunReport {
        debug!("Executing: {}", self.describe(runner));

        let spawned = self
            .command(runner)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => return RunReport::errored(format!("could not start runner: {}", e)),
        };

        let (stdout, stderr) = tokio::join!(
            read_lines(child.stdout.take()),
            read_lines(child.stderr.take())
        );

        match child.wait().await {
            Ok(status) => RunReport {
                status: classify(exit_failure(status), &stdout, &stderr),
                stdout,
            },
            Err(e) => RunReport::errored(format!("waiting for runner: {}", e)),
        }
    }
}

fn exit_failure(status: ExitStatus) -> Option<String> {
    (!status.success()).then(|| status.to_string())
}

/// Copy `pipe` to `sink` as bytes arrive, returning what was read as lines
async fn tee_lines<R, W>(mut pipe: R, sink: &mut W) -> std::io::Result<Vec<String>>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut seen = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = pipe.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        sink.write_all(&chunk[..n]).await?;
        sink.flush().await?;
        seen.extend_from_slice(&chunk[..n]);
    }
    Ok(String::from_utf8_lossy(&seen)
        .lines()
        .map(String::from)
        .collect())
}

async fn read_lines<R: AsyncRead + Unpin>(pipe: Option<R>) -> Vec<String> {
    let Some(pipe) = pipe else {
        return Vec::new();
    };

    let mut lines = BufReader::new(pipe).lines();
    let mut collected = Vec::new();
    while let Ok(Some(line)) = lines.next_line().await {
        collected.push(line);
    }
    collected
}
