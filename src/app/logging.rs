//! Progress logging utilities.

use log::info;

/// Logs progress of a bulk pull after a chunk has been committed.
///
/// # Arguments
///
/// * `start_time` - The start time of the pull
/// * `processed` - Domains processed so far (successes and failures)
/// * `failed` - Domains that failed so far
/// * `total_rows` - Data rows in the sheet
pub fn log_progress(
    start_time: std::time::Instant,
    processed: usize,
    failed: usize,
    total_rows: usize,
) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} domain(s) ({} failed) out of {} row(s) in {:.2} seconds (~{:.2} domains/sec)",
        processed, failed, total_rows, elapsed_secs, rate
    );
}
