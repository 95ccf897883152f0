// ==========================================
// Pre-sale Unit Inventory - Import Reporter
// ==========================================
// Responsibility: pure presentation of parse results and the reconciled
// import report; builds the corrective resubmission batch on request
// No auto-retry lives here or anywhere else in the pipeline
// ==========================================

use crate::domain::unit::{BulkUnitRow, ImportReport};
use crate::i18n;
use crate::importer::accumulator::ParsedBatch;

/// Localized one-line summary: "Imported 8/10 units, 2 failed".
pub fn summary_line(report: &ImportReport) -> String {
    i18n::t_with_args(
        "report.summary",
        &[
            ("success", &report.summary.success.to_string()),
            ("total", &report.summary.total.to_string()),
            ("failed", &report.summary.failed.to_string()),
        ],
    )
}

/// One localized line per soft-failed row, keyed by 1-based row number
/// with the server's reason.
pub fn failure_lines(report: &ImportReport) -> Vec<String> {
    report
        .details
        .errors
        .iter()
        .map(|f| {
            i18n::t_with_args(
                "report.row_failed",
                &[("row", &f.row.to_string()), ("reason", &f.error)],
            )
        })
        .collect()
}

/// One localized line per locally invalid row, shown before submission
/// is possible.
pub fn invalid_row_lines(batch: &ParsedBatch) -> Vec<String> {
    batch
        .invalid_rows
        .iter()
        .map(|r| {
            i18n::t_with_args(
                "report.row_invalid",
                &[("row", &r.row.to_string()), ("errors", &r.errors.join("; "))],
            )
        })
        .collect()
}

/// The rejected rows' original data, for a corrective resubmission.
///
/// The caller decides whether and when to resubmit; the report itself
/// is never mutated.
pub fn resubmission_rows(report: &ImportReport) -> Vec<BulkUnitRow> {
    report.details.errors.iter().map(|f| f.data.clone()).collect()
}
