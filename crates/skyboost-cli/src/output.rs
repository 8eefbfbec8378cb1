//! Output formatting helpers.

use colored::Colorize;

use skyboost::actions::ActionOutcome;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Human-readable rendering of an action outcome.
pub fn describe(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Performed => "performed".to_string(),
        ActionOutcome::DryRun => "skipped (dry run)".to_string(),
        ActionOutcome::AlreadyDone => "already done".to_string(),
        ActionOutcome::Failed(reason) => format!("failed: {reason}"),
    }
}
