// ==========================================
// Pre-sale Unit Inventory - Orchestrator Integration Tests
// ==========================================
// Covers: single-request submission, partial-success reconciliation,
// hard-failure propagation and the progress estimator lifecycle, all
// against an in-process mock of the create-many endpoint
// ==========================================

use async_trait::async_trait;
use presale_unit_import::domain::unit::{
    BulkUnitRow, CreatedUnit, FailedUnit, ImportDetails, ImportReport, ImportSummary,
};
use presale_unit_import::importer::reporter;
use presale_unit_import::{
    BulkCreateClient, ImportConfig, ImportError, UnitImporter, UnitImporterImpl,
};
use presale_unit_import::importer::ImportResult;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ==========================================
// Mock clients
// ==========================================

/// Accepts everything except the listed unit codes, which come back as
/// duplicate-code soft failures inside a successful report.
struct MockBulkCreateClient {
    reject_units: Vec<String>,
    calls: Arc<AtomicUsize>,
    delay: Duration,
}

impl MockBulkCreateClient {
    fn new(reject_units: &[&str]) -> Self {
        Self {
            reject_units: reject_units.iter().map(|u| u.to_string()).collect(),
            calls: Arc::new(AtomicUsize::new(0)),
            delay: Duration::ZERO,
        }
    }

    /// Handle that survives moving the client into the importer.
    fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl BulkCreateClient for MockBulkCreateClient {
    async fn create_units(
        &self,
        _project_id: &str,
        units: &[BulkUnitRow],
    ) -> ImportResult<ImportReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut created = Vec::new();
        let mut errors = Vec::new();
        for (index, unit) in units.iter().enumerate() {
            let row = index + 1;
            if self.reject_units.contains(&unit.unit) {
                errors.push(FailedUnit {
                    row,
                    error: "duplicate unit code".to_string(),
                    data: unit.clone(),
                });
            } else {
                created.push(CreatedUnit {
                    row,
                    code: unit.unit.clone(),
                    id: format!("u-{row}"),
                });
            }
        }

        Ok(ImportReport {
            summary: ImportSummary {
                total: units.len(),
                success: created.len(),
                failed: errors.len(),
            },
            details: ImportDetails { created, errors },
        })
    }
}

/// Always fails at the request level.
struct FailingClient;

#[async_trait]
impl BulkCreateClient for FailingClient {
    async fn create_units(
        &self,
        _project_id: &str,
        _units: &[BulkUnitRow],
    ) -> ImportResult<ImportReport> {
        Err(ImportError::RateLimited("try again later".to_string()))
    }
}

// ==========================================
// Helpers
// ==========================================

fn unit_row(unit: &str) -> BulkUnitRow {
    BulkUnitRow {
        building: "A1".to_string(),
        floor: 1,
        unit: unit.to_string(),
        unit_type: None,
        area: 50.0,
        bedrooms: None,
        bathrooms: None,
        price: 1_000_000.0,
        direction: None,
        view: None,
        commission_rate: None,
    }
}

fn rows(count: usize) -> Vec<BulkUnitRow> {
    (1..=count).map(|i| unit_row(&format!("A1-{i:04}"))).collect()
}

fn fast_config() -> ImportConfig {
    ImportConfig {
        progress_tick: Duration::from_millis(1),
        ..ImportConfig::default()
    }
}

// ==========================================
// Tests
// ==========================================

#[tokio::test]
async fn test_partial_success_is_returned_verbatim() {
    let client = MockBulkCreateClient::new(&["A1-0003", "A1-0007"]);
    let importer = UnitImporterImpl::new(client, fast_config());

    let report = importer.import_units("prj-1", rows(10)).await.unwrap();

    assert_eq!(report.summary.total, 10);
    assert_eq!(report.summary.success, 8);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(report.details.errors.len(), 2);
    // Each soft failure echoes the submitted row data
    assert_eq!(report.details.errors[0].data.unit, "A1-0003");
    assert_eq!(report.details.errors[1].data.unit, "A1-0007");

    // The failed subset is the basis for a corrective resubmission
    let resubmit = reporter::resubmission_rows(&report);
    assert_eq!(resubmit.len(), 2);
    assert_eq!(resubmit[0].unit, "A1-0003");
}

#[tokio::test]
async fn test_exactly_one_request_per_batch() {
    let client = MockBulkCreateClient::new(&[]);
    let calls = client.call_counter();
    let importer = UnitImporterImpl::new(client, fast_config());

    let report = importer.import_units("prj-1", rows(250)).await.unwrap();
    assert_eq!(report.summary.success, 250);

    // No chunking: one call regardless of batch size
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_batch_is_rejected_without_a_request() {
    let client = MockBulkCreateClient::new(&[]);
    let importer = UnitImporterImpl::new(client, fast_config());

    let err = importer.import_units("prj-1", Vec::new()).await.unwrap_err();
    assert!(matches!(err, ImportError::EmptyBatch));
}

#[tokio::test]
async fn test_hard_failure_produces_no_report() {
    let importer = UnitImporterImpl::new(FailingClient, fast_config());

    let err = importer.import_units("prj-1", rows(5)).await.unwrap_err();
    assert!(matches!(err, ImportError::RateLimited(_)));
}

#[tokio::test]
async fn test_import_text_refuses_pending_validation_errors() {
    let importer = UnitImporterImpl::new(MockBulkCreateClient::new(&[]), fast_config());

    let text = "A1\t1\tA1-0101\t\t50\t\t\t1000000\n\
                A1\tbad\tA1-0201\t\t50\t\t\t1000000";
    let err = importer.import_text("prj-1", text).await.unwrap_err();

    assert!(matches!(err, ImportError::ValidationPending(1)));
}

#[tokio::test]
async fn test_import_text_submits_clean_batch() {
    let importer = UnitImporterImpl::new(MockBulkCreateClient::new(&[]), fast_config());

    let text = "A1\t1\tA1-0101\t\t50\t\t\t1000000\n\
                A1\t2\tA1-0201\t\t50\t\t\t1000000";
    let report = importer.import_text("prj-1", text).await.unwrap();

    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.failed, 0);
}

#[tokio::test]
async fn test_progress_estimator_lifecycle() {
    let client = MockBulkCreateClient::new(&[]).with_delay(Duration::from_millis(80));
    let importer = Arc::new(UnitImporterImpl::new(client, fast_config()));
    let progress = importer.progress();

    let task = {
        let importer = Arc::clone(&importer);
        tokio::spawn(async move { importer.import_units("prj-1", rows(10)).await })
    };

    // Sample the estimate while the request is in flight
    tokio::time::sleep(Duration::from_millis(40)).await;
    let mid_flight = *progress.borrow();
    assert!(mid_flight < 10, "estimate {mid_flight} must stay below the total");

    let report = task.await.unwrap().unwrap();
    assert_eq!(report.summary.success, 10);

    // Reset after resolution, and no dangling timer keeps ticking
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(*progress.borrow(), 0);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(*progress.borrow(), 0);
}

#[tokio::test]
async fn test_progress_reset_after_hard_failure() {
    let importer = Arc::new(UnitImporterImpl::new(FailingClient, fast_config()));
    let progress = importer.progress();

    let err = importer.import_units("prj-1", rows(10)).await.unwrap_err();
    assert!(matches!(err, ImportError::RateLimited(_)));

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(*progress.borrow(), 0);
}
