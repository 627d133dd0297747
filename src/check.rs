//! Check command: run every guard declared in a manifest.

use anyhow::{Result, bail};
use tracing::{debug, info, info_span, warn};

use roseau_guard::{
    GuardError, validate_ascending_pair, validate_ascending_sequence, validate_equal_length,
};

use crate::cli::CheckArgs;
use crate::config::Manifest;

/// Outcome counts of a manifest run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub passed: usize,
    pub failed: usize,
}

impl CheckReport {
    fn record(&mut self, kind: &str, label: &str, outcome: Result<(), GuardError>) {
        match outcome {
            Ok(()) => {
                info!(kind, check = label, "passed");
                self.passed += 1;
            }
            Err(e) => {
                warn!(kind, check = label, param = e.param(), "{e}");
                self.failed += 1;
            }
        }
    }
}

/// Run the check command.
pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();

    let manifest = Manifest::load(&args.config)?;
    info!(
        path = %args.config.display(),
        n_checks = manifest.n_checks(),
        "manifest loaded"
    );

    let report = run_manifest(&manifest);
    info!(
        passed = report.passed,
        failed = report.failed,
        "checks complete"
    );

    if report.failed > 0 {
        bail!(
            "{} of {} checks failed",
            report.failed,
            report.passed + report.failed
        );
    }
    Ok(())
}

/// Runs pairs, then sequences, then lengths. A failing check does not stop
/// the ones after it.
pub fn run_manifest(manifest: &Manifest) -> CheckReport {
    let mut report = CheckReport::default();

    for pair in &manifest.pairs {
        let label = format!("{} <= {}", pair.first_name, pair.second_name);
        let outcome = validate_ascending_pair(
            &pair.first,
            &pair.first_name,
            &pair.second,
            &pair.second_name,
        );
        report.record("pair", &label, outcome);
    }

    for sequence in &manifest.sequences {
        debug!(name = %sequence.name, n_dates = sequence.dates.len(), "checking sequence");
        let outcome = validate_ascending_sequence(&sequence.dates, &sequence.name);
        report.record("sequence", &sequence.name, outcome);
    }

    for length in &manifest.lengths {
        let label = format!("{} ~ {}", length.first_name, length.second_name);
        let outcome = validate_equal_length(
            length.first.as_ref(),
            &length.first_name,
            length.second.as_ref(),
            &length.second_name,
        );
        report.record("length", &label, outcome);
    }

    report
}
