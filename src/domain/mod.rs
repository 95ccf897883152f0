// ==========================================
// Pre-sale Unit Inventory - Domain Layer
// ==========================================
// Responsibility: entities and wire types only
// No parsing, no validation, no network access here
// ==========================================

pub mod unit;

// Re-export core types
pub use unit::{
    BulkCreateRequest, BulkUnitRow, CreatedUnit, FailedUnit, ImportBatchLog, ImportDetails,
    ImportReport, ImportSummary, InvalidRow, RawUnitCandidate,
};
