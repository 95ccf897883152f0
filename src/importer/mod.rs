// ==========================================
// Pre-sale Unit Inventory - Import Layer
// ==========================================
// Responsibility: bulk tabular import of unit inventory
// Flow: raw text -> tokens -> typed rows -> validated partitions ->
// one network batch -> reconciled report
// ==========================================

// Module declarations
pub mod accumulator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod progress;
pub mod remote_client;
pub mod reporter;
pub mod row_validator;
pub mod tokenizer;
pub mod unit_importer_impl;
pub mod unit_importer_trait;

// Re-export core types
pub use accumulator::{accumulate, ParsedBatch};
pub use error::{ImportError, ImportResult};
pub use field_mapper::{map_row, UnitColumn, COLUMN_LAYOUT};
pub use file_parser::read_import_text;
pub use progress::ProgressEstimator;
pub use remote_client::HttpBulkCreateClient;
pub use row_validator::validate;
pub use tokenizer::{detect_delimiter, tokenize_line, Delimiter};
pub use unit_importer_impl::UnitImporterImpl;

// Re-export trait interfaces
pub use unit_importer_trait::{BulkCreateClient, UnitImporter};
