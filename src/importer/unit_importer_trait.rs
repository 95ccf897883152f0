// ==========================================
// Pre-sale Unit Inventory - Importer Traits
// ==========================================
// Responsibility: the seams of the import orchestration (no
// implementations here)
// ==========================================

use crate::domain::unit::{BulkUnitRow, ImportReport};
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use tokio::sync::watch;

// ==========================================
// BulkCreateClient Trait
// ==========================================
// Purpose: the one remote call of the pipeline
// Implementer: HttpBulkCreateClient (tests use in-process mocks)
#[async_trait]
pub trait BulkCreateClient: Send + Sync {
    /// Submit the full batch in a single request.
    ///
    /// # Returns
    /// - Ok(ImportReport): the call succeeded; per-row rejections (soft
    ///   failures such as duplicate unit codes) live inside the report
    /// - Err(ImportError): request-level hard failure; no partial state
    ///   is recoverable client-side and the whole batch must be retried
    async fn create_units(
        &self,
        project_id: &str,
        units: &[BulkUnitRow],
    ) -> ImportResult<ImportReport>;
}

// ==========================================
// UnitImporter Trait
// ==========================================
// Purpose: batch submission orchestration
// Implementer: UnitImporterImpl
#[async_trait]
pub trait UnitImporter: Send + Sync {
    /// Submit pre-validated rows as one batch.
    ///
    /// Exactly one network request; no chunking, no automatic retry.
    /// The server's per-row acceptance is returned verbatim.
    async fn import_units(
        &self,
        project_id: &str,
        rows: Vec<BulkUnitRow>,
    ) -> ImportResult<ImportReport>;

    /// Parse raw pasted/uploaded text and submit it.
    ///
    /// Refuses to submit while any row still fails validation; the
    /// caller gets the pending count and must fix the input first.
    async fn import_text(&self, project_id: &str, text: &str) -> ImportResult<ImportReport>;

    /// Observe the cosmetic progress estimate of the in-flight batch.
    fn progress(&self) -> watch::Receiver<usize>;
}
