// ==========================================
// Pre-sale Unit Inventory - Row Validator
// ==========================================
// Responsibility: per-field semantic rules on one RawUnitCandidate
// All violations for a row are collected, not just the first; the only
// short-circuit is the column-count guard
// ==========================================

use crate::domain::unit::{BulkUnitRow, InvalidRow, RawUnitCandidate};
use crate::i18n;

/// Minimum token count for a line to be considered a data row at all.
const MIN_COLUMNS: usize = 4;

/// Validate one candidate into a typed row, or collect every violation.
///
/// A line produces exactly one `BulkUnitRow` or exactly one `InvalidRow`,
/// never both; the row number carried on failure is the candidate's
/// 1-based position among non-blank input lines.
pub fn validate(candidate: &RawUnitCandidate) -> Result<BulkUnitRow, InvalidRow> {
    // Column-count guard: a line this short is not a malformed row, it is
    // not a row; skip field checks so the user gets one clear message.
    if candidate.column_count < MIN_COLUMNS {
        return Err(InvalidRow {
            row: candidate.line,
            errors: vec![i18n::t("validate.not_enough_columns")],
        });
    }

    let mut errors = Vec::new();

    let building = match &candidate.building {
        Some(v) => Some(v.clone()),
        None => {
            errors.push(i18n::t("validate.building_required"));
            None
        }
    };

    let floor = match required_int(&candidate.floor, 1) {
        Some(v) => Some(v),
        None => {
            errors.push(i18n::t("validate.floor_invalid"));
            None
        }
    };

    let unit = match &candidate.unit {
        Some(v) => Some(v.clone()),
        None => {
            errors.push(i18n::t("validate.unit_required"));
            None
        }
    };

    let area = match required_positive_float(&candidate.area) {
        Some(v) => Some(v),
        None => {
            errors.push(i18n::t("validate.area_invalid"));
            None
        }
    };

    let bedrooms = match optional_int(&candidate.bedrooms, 0) {
        Ok(v) => v,
        Err(()) => {
            errors.push(i18n::t("validate.bedrooms_invalid"));
            None
        }
    };

    let bathrooms = match optional_int(&candidate.bathrooms, 0) {
        Ok(v) => v,
        Err(()) => {
            errors.push(i18n::t("validate.bathrooms_invalid"));
            None
        }
    };

    let price = match required_positive_float(&candidate.price) {
        Some(v) => Some(v),
        None => {
            errors.push(i18n::t("validate.price_invalid"));
            None
        }
    };

    let commission_rate = match optional_bounded_float(&candidate.commission_rate, 0.0, 100.0) {
        Ok(v) => v,
        Err(()) => {
            errors.push(i18n::t("validate.commission_out_of_range"));
            None
        }
    };

    if !errors.is_empty() {
        return Err(InvalidRow {
            row: candidate.line,
            errors,
        });
    }

    // All required fields are Some here; the unwraps cannot fire once
    // errors is empty.
    Ok(BulkUnitRow {
        building: building.unwrap_or_default(),
        floor: floor.unwrap_or_default(),
        unit: unit.unwrap_or_default(),
        unit_type: candidate.unit_type.clone(),
        area: area.unwrap_or_default(),
        bedrooms,
        bathrooms,
        price: price.unwrap_or_default(),
        direction: candidate.direction.clone(),
        view: candidate.view.clone(),
        commission_rate,
    })
}

/// Required integer with a lower bound; non-numeric input is a failure.
fn required_int(value: &Option<String>, min: i32) -> Option<i32> {
    value
        .as_deref()?
        .parse::<i32>()
        .ok()
        .filter(|v| *v >= min)
}

/// Required float, strictly positive; NaN and non-numeric are failures.
fn required_positive_float(value: &Option<String>) -> Option<f64> {
    value
        .as_deref()?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Optional integer with a lower bound: absent is fine, junk is not.
fn optional_int(value: &Option<String>, min: i32) -> Result<Option<i32>, ()> {
    match value.as_deref() {
        None => Ok(None),
        Some(v) => v.parse::<i32>().ok().filter(|v| *v >= min).map(Some).ok_or(()),
    }
}

/// Optional float constrained to an inclusive range.
fn optional_bounded_float(value: &Option<String>, min: f64, max: f64) -> Result<Option<f64>, ()> {
    match value.as_deref() {
        None => Ok(None),
        Some(v) => v
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && (min..=max).contains(v))
            .map(Some)
            .ok_or(()),
    }
}
