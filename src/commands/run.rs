use anyhow::{bail, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::config::FleetConfig;
use crate::invocation::Invocation;
use crate::outcome::{status_code, ExecutionResult, RunSummary};
use crate::roster::{HostRecord, Roster, RosterError};
use super::utils::*;

/// Status recorded when the transport cannot be spawned at all, matching
/// what a shell reports for a missing command.
pub const TRANSPORT_MISSING: i32 = 127;

/// Status recorded when the transport exists but cannot be executed.
pub const TRANSPORT_NOT_EXECUTABLE: i32 = 126;

/// Launches one invocation and blocks until it finishes.
pub trait Executor {
    fn execute(&mut self, invocation: &Invocation) -> Result<i32>;
}

/// Spawns the invocation as a child process sharing our stdio.
#[derive(Debug, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&mut self, invocation: &Invocation) -> Result<i32> {
        let mut cmd = invocation.to_command();
        match run_command_status(&mut cmd) {
            Ok(status) => Ok(status_code(status)),
            Err(e) => {
                log_error(&format!("Failed to execute {}: {}", invocation.program(), e));
                Ok(spawn_error_status(&e))
            }
        }
    }
}

/// Spawn failures become a per-host status so the rest of the roster still runs.
fn spawn_error_status(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::PermissionDenied => TRANSPORT_NOT_EXECUTABLE,
        _ => TRANSPORT_MISSING,
    }
}

/// Run the invocation on every roster host in order: echo, execute, report.
///
/// A host failing does not stop the loop. A malformed roster line does: the
/// error is returned once the hosts before it have run.
pub fn run_roster<I, E, W>(
    roster: I,
    remote_cmd: &str,
    config: &FleetConfig,
    executor: &mut E,
    out: &mut W,
) -> Result<RunSummary>
where
    I: IntoIterator<Item = Result<HostRecord, RosterError>>,
    E: Executor,
    W: Write,
{
    let mut summary = RunSummary::default();

    for record in roster {
        let record = record?;
        let invocation = Invocation::for_host(&record, remote_cmd, config);

        writeln!(out, "{}", invocation.display())?;
        out.flush()?;

        let status = executor.execute(&invocation)?;
        let result = ExecutionResult {
            identity: invocation.identity,
            status,
        };

        if result.failed() {
            writeln!(out, "{}", failure_line(&result.identity))?;
            out.flush()?;
        }
        summary.record(result);
    }

    Ok(summary)
}

pub fn run(roster_path: &Path, remote_cmd: &str, config: &FleetConfig) -> Result<()> {
    let roster = Roster::open(roster_path)?;
    let summary = run_roster(
        roster,
        remote_cmd,
        config,
        &mut ProcessExecutor,
        &mut io::stdout(),
    )?;

    if summary.all_succeeded() {
        log_success(&format!("{} host(s) completed", summary.attempted()));
        return Ok(());
    }

    let failed: Vec<&str> = summary.failures().map(|r| r.identity.as_str()).collect();
    log_warning(&format!(
        "{} of {} host(s) failed",
        failed.len(),
        summary.attempted()
    ));
    bail!("Some hosts failed: {}", failed.join(", "))
}
