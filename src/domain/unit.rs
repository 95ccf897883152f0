// ==========================================
// Pre-sale Unit Inventory - Domain Model
// ==========================================
// Responsibility: typed records exchanged between the import pipeline
// and the remote create-many endpoint
// Wire naming: camelCase (remote service contract)
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// BulkUnitRow - validated unit record
// ==========================================
// Invariant: a value of this type has passed every row-validator rule;
// invalid data never reaches it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUnitRow {
    pub building: String,              // building code (non-empty)
    pub floor: i32,                    // floor number (>= 1)
    pub unit: String,                  // unit code (non-empty)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,     // unit type label
    pub area: f64,                     // usable area, m2 (> 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,         // bedroom count (>= 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i32>,        // bathroom count (>= 0)
    pub price: f64,                    // listed price, VND (> 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,     // facing direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,          // view description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,  // commission percentage in [0, 100]
}

// ==========================================
// RawUnitCandidate - pipeline intermediate
// ==========================================
// Produced by the field mapper, consumed by the row validator.
// Lifetime: import pipeline only, never serialized to the wire.
#[derive(Debug, Clone, Default)]
pub struct RawUnitCandidate {
    pub building: Option<String>,
    pub floor: Option<String>,
    pub unit: Option<String>,
    pub unit_type: Option<String>,
    pub area: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub price: Option<String>,
    pub direction: Option<String>,
    pub view: Option<String>,
    pub commission_rate: Option<String>,

    // Metadata
    pub column_count: usize, // token count before mapping (short-line guard)
    pub line: usize,         // 1-based line number among non-blank lines
}

// ==========================================
// InvalidRow - row-level validation outcome
// ==========================================
// Exactly one of BulkUnitRow / InvalidRow exists per non-blank input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidRow {
    pub row: usize,          // 1-based line number among non-blank lines
    pub errors: Vec<String>, // localized, human-readable messages
}

// ==========================================
// BulkCreateRequest - create-many request body
// ==========================================
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateRequest {
    pub project_id: String,
    pub units: Vec<BulkUnitRow>,
}

// ==========================================
// ImportReport - reconciled server outcome
// ==========================================
// Created once per submitted batch from the server response.
// The orchestrator never recomputes the success/failure split; the
// server's per-row acceptance is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub summary: ImportSummary,
    pub details: ImportDetails,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportDetails {
    #[serde(default)]
    pub created: Vec<CreatedUnit>,
    #[serde(default)]
    pub errors: Vec<FailedUnit>,
}

/// One accepted row: the server echoes the unit code and assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedUnit {
    pub row: usize,
    pub code: String,
    pub id: String,
}

/// One soft-failed row: server reason plus the submitted data, so the
/// caller can correct and resubmit just this subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedUnit {
    pub row: usize,
    pub error: String,
    pub data: BulkUnitRow,
}

// ==========================================
// ImportBatchLog - local audit record
// ==========================================
// Emitted through tracing, not persisted; the remote store is the only
// durable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBatchLog {
    pub batch_id: String,              // UUID assigned per submission
    pub project_id: String,
    pub total_rows: usize,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: i64,
}
