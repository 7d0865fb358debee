//! Statistics printing.
//!
//! Summaries carry counts only. Failed domains are named once, by the bulk
//! pull itself, when they fail.

use log::info;
use strum::IntoEnumIterator;

use crate::driver::PullReport;
use crate::error_handling::{ErrorType, ProcessingStats};

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// One-line summary of a bulk pull.
pub fn pull_summary_line(report: &PullReport) -> String {
    format!(
        "Processed {} domain{} ({} succeeded, {} failed) in {:.1}s across {} commit{}",
        report.domains_processed,
        plural(report.domains_processed),
        report.successful,
        report.failed,
        report.elapsed_seconds,
        report.chunks_committed,
        plural(report.chunks_committed),
    )
}

/// Prints the summary of a bulk pull to the log.
pub fn print_pull_summary(report: &PullReport) {
    info!("{}", pull_summary_line(report));
}

/// Error count lines, one per category that saw at least one failure,
/// preceded by a total line. Empty when nothing failed.
pub fn error_statistics_lines(error_stats: &ProcessingStats) -> Vec<String> {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return Vec::new();
    }

    let mut lines = vec![format!("Error Counts ({} total):", total_errors)];
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            lines.push(format!("   {}: {}", error_type.as_str(), count));
        }
    }
    lines
}

/// Prints error statistics to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    for line in error_statistics_lines(error_stats) {
        info!("{line}");
    }
}
