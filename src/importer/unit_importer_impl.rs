// ==========================================
// Pre-sale Unit Inventory - Import Orchestrator
// ==========================================
// Responsibility: submit accumulated valid rows as one batch and hand
// back the server's reconciled report untouched
// Flow: (accumulate ->) guard -> single request + progress timer ->
// report or hard failure
// ==========================================

use crate::config::ImportConfig;
use crate::domain::unit::{BulkUnitRow, ImportBatchLog, ImportReport};
use crate::importer::accumulator::accumulate;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::progress::ProgressEstimator;
use crate::importer::unit_importer_trait::{BulkCreateClient, UnitImporter};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Instant;
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// UnitImporterImpl
// ==========================================
pub struct UnitImporterImpl<C>
where
    C: BulkCreateClient,
{
    client: C,
    config: ImportConfig,
    progress_tx: watch::Sender<usize>,
}

impl<C> UnitImporterImpl<C>
where
    C: BulkCreateClient,
{
    pub fn new(client: C, config: ImportConfig) -> Self {
        let (progress_tx, _) = watch::channel(0usize);
        Self {
            client,
            config,
            progress_tx,
        }
    }
}

#[async_trait]
impl<C> UnitImporter for UnitImporterImpl<C>
where
    C: BulkCreateClient,
{
    /// Submit pre-validated rows as one batch.
    ///
    /// One request, no chunking, no automatic retry. While the call is
    /// in flight a cosmetic progress timer ticks toward (never up to)
    /// the row count; it is stopped and reset on every exit path. The
    /// server's per-row outcome is authoritative and returned verbatim.
    #[instrument(skip(self, rows), fields(project_id = %project_id, rows = rows.len()))]
    async fn import_units(
        &self,
        project_id: &str,
        rows: Vec<BulkUnitRow>,
    ) -> ImportResult<ImportReport> {
        if rows.is_empty() {
            return Err(ImportError::EmptyBatch);
        }

        let batch_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();
        let start = Instant::now();
        info!(batch_id = %batch_id, "starting bulk unit import");

        let estimator = ProgressEstimator::start(
            self.progress_tx.clone(),
            rows.len(),
            self.config.progress_tick,
        );

        // Once submitted the rows are immutable; only the server decides
        // which of them it accepts.
        let result = self.client.create_units(project_id, &rows).await;

        // The timer must die on both paths before anything is returned.
        estimator.finish();

        let batch_log = ImportBatchLog {
            batch_id: batch_id.clone(),
            project_id: project_id.to_string(),
            total_rows: rows.len(),
            started_at,
            elapsed_ms: start.elapsed().as_millis() as i64,
        };

        match result {
            Ok(report) => {
                info!(
                    batch_id = %batch_log.batch_id,
                    total = report.summary.total,
                    success = report.summary.success,
                    failed = report.summary.failed,
                    elapsed_ms = batch_log.elapsed_ms,
                    "bulk unit import finished"
                );
                if report.summary.failed > 0 {
                    warn!(
                        batch_id = %batch_log.batch_id,
                        failed = report.summary.failed,
                        "server rejected part of the batch"
                    );
                }
                Ok(report)
            }
            Err(e) => {
                error!(
                    batch_id = %batch_log.batch_id,
                    elapsed_ms = batch_log.elapsed_ms,
                    error = %e,
                    "bulk unit import failed"
                );
                Err(e)
            }
        }
    }

    /// Parse raw text and submit it in one go.
    ///
    /// Submission is refused while any validation errors remain; the
    /// user fixes the input (or removes the offending lines) first.
    async fn import_text(&self, project_id: &str, text: &str) -> ImportResult<ImportReport> {
        let batch = accumulate(text);
        if !batch.is_clean() {
            return Err(ImportError::ValidationPending(batch.invalid_rows.len()));
        }
        self.import_units(project_id, batch.valid_rows).await
    }

    fn progress(&self) -> watch::Receiver<usize> {
        self.progress_tx.subscribe()
    }
}
