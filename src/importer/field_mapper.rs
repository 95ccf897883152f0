// ==========================================
// Pre-sale Unit Inventory - Field Mapper
// ==========================================
// Responsibility: positional token list -> RawUnitCandidate
// Schema-by-convention: fixed column order, no header row; the layout
// lives in one table so a header-based mapping could replace it without
// touching the validator
// ==========================================

use crate::domain::unit::RawUnitCandidate;

/// The logical columns of a bulk-import row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitColumn {
    Building,
    Floor,
    Unit,
    UnitType,
    Area,
    Bedrooms,
    Bathrooms,
    Price,
    Direction,
    View,
    CommissionRate,
}

/// Column order as agreed with the sales-team spreadsheet template.
pub const COLUMN_LAYOUT: [UnitColumn; 11] = [
    UnitColumn::Building,
    UnitColumn::Floor,
    UnitColumn::Unit,
    UnitColumn::UnitType,
    UnitColumn::Area,
    UnitColumn::Bedrooms,
    UnitColumn::Bathrooms,
    UnitColumn::Price,
    UnitColumn::Direction,
    UnitColumn::View,
    UnitColumn::CommissionRate,
];

/// Map tokenized fields onto the candidate shape by column position.
///
/// Only trims whitespace and applies positional naming; numeric
/// conversion and validation happen in the row validator. Never fails:
/// a too-short field list yields `None` for the missing positions.
pub fn map_row(fields: &[String], line: usize) -> RawUnitCandidate {
    RawUnitCandidate {
        building: field_at(fields, UnitColumn::Building),
        floor: field_at(fields, UnitColumn::Floor),
        unit: field_at(fields, UnitColumn::Unit),
        unit_type: field_at(fields, UnitColumn::UnitType),
        area: field_at(fields, UnitColumn::Area),
        bedrooms: field_at(fields, UnitColumn::Bedrooms),
        bathrooms: field_at(fields, UnitColumn::Bathrooms),
        price: field_at(fields, UnitColumn::Price),
        direction: field_at(fields, UnitColumn::Direction),
        view: field_at(fields, UnitColumn::View),
        commission_rate: field_at(fields, UnitColumn::CommissionRate),
        column_count: fields.len(),
        line,
    }
}

/// Extract the trimmed token for a column; blank and missing become None.
fn field_at(fields: &[String], column: UnitColumn) -> Option<String> {
    let index = COLUMN_LAYOUT.iter().position(|c| *c == column)?;
    fields
        .get(index)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
