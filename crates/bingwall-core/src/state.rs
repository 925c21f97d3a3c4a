//! Daemon state (outcome of the most recent refresh).

use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Debug, Clone, Default)]
pub struct State {
    pub last_run: Option<LastRun>,
}

#[derive(Debug, Clone)]
pub struct LastRun {
    pub at: SystemTime,
    pub outcome: RunOutcome,
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    Applied { path: PathBuf },
    Failed { kind: &'static str, message: String },
}

impl LastRun {
    pub fn now(outcome: RunOutcome) -> Self {
        Self {
            at: SystemTime::now(),
            outcome,
        }
    }

    /// One-line summary for `STATUS` responses.
    pub fn status_line(&self) -> String {
        let age_s = SystemTime::now()
            .duration_since(self.at)
            .unwrap_or_default()
            .as_secs();
        match &self.outcome {
            RunOutcome::Applied { path } => {
                format!("last=ok age_s={age_s} path={}", path.display())
            }
            RunOutcome::Failed { kind, message } => {
                format!("last=err age_s={age_s} kind={kind} msg={message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_reports_both_outcomes() {
        let ok = LastRun::now(RunOutcome::Applied {
            path: PathBuf::from("/tmp/w.jpg"),
        });
        assert!(ok.status_line().starts_with("last=ok "));
        assert!(ok.status_line().ends_with("path=/tmp/w.jpg"));

        let err = LastRun::now(RunOutcome::Failed {
            kind: "transport",
            message: "connection refused".into(),
        });
        assert!(err.status_line().contains("kind=transport"));
    }
}
