use std::process::ExitStatus;

/// Outcome of running the invocation on one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub identity: String,
    pub status: i32,
}

impl ExecutionResult {
    /// Only strictly positive statuses count as failures. Negative values
    /// (signal-terminated children) are treated as success.
    pub fn failed(&self) -> bool {
        self.status > 0
    }
}

/// Per-host results in roster order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<ExecutionResult>,
}

impl RunSummary {
    pub fn record(&mut self, result: ExecutionResult) {
        self.results.push(result);
    }

    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExecutionResult> {
        self.results.iter().filter(|r| r.failed())
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Exit code of a finished child; `-signal` when it was killed by a signal.
pub fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
