// ==========================================
// Pre-sale Unit Inventory - Core Library
// ==========================================
// Bulk tabular import pipeline for real-estate unit inventory:
// paste-from-spreadsheet or CSV/TSV upload -> parse -> validate ->
// partial-success remote import -> reconciled report
// ==========================================

// Initialize the i18n catalog (vi product surface, en fallback)
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and wire types
pub mod domain;

// Import layer - the pipeline itself
pub mod importer;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// ==========================================
// Re-export core types
// ==========================================

pub use config::ImportConfig;

pub use domain::{
    BulkCreateRequest, BulkUnitRow, CreatedUnit, FailedUnit, ImportBatchLog, ImportDetails,
    ImportReport, ImportSummary, InvalidRow, RawUnitCandidate,
};

pub use importer::{
    accumulate, BulkCreateClient, Delimiter, HttpBulkCreateClient, ImportError, ParsedBatch,
    UnitImporter, UnitImporterImpl,
};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Pre-sale Unit Inventory Import";
