// ==========================================
// Pre-sale Unit Inventory - Batch Accumulator
// ==========================================
// Responsibility: run tokenizer -> field mapper -> row validator over
// every non-blank line, partitioning into valid and invalid rows
// Synchronous and pure; cheap enough to re-run per keystroke for a
// live preview
// ==========================================

use crate::domain::unit::{BulkUnitRow, InvalidRow};
use crate::importer::field_mapper::map_row;
use crate::importer::row_validator::validate;
use crate::importer::tokenizer::{detect_delimiter, tokenize_line};

/// Outcome of parsing one pasted or uploaded batch.
///
/// Exhaustive, mutually exclusive partition: every non-blank input line
/// lands in exactly one of the two lists, in input order.
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    pub valid_rows: Vec<BulkUnitRow>,
    pub invalid_rows: Vec<InvalidRow>,
}

impl ParsedBatch {
    /// Number of non-blank lines accounted for.
    pub fn total(&self) -> usize {
        self.valid_rows.len() + self.invalid_rows.len()
    }

    /// True when every line validated; submission policy requires this.
    pub fn is_clean(&self) -> bool {
        self.invalid_rows.is_empty()
    }
}

/// Parse a whole batch of raw text.
///
/// Blank and whitespace-only lines are dropped before numbering, so row
/// numbers in `invalid_rows` match the visible non-blank line sequence
/// the user sees (1-based). The delimiter is chosen once for the whole
/// batch, never per line.
pub fn accumulate(text: &str) -> ParsedBatch {
    let delimiter = detect_delimiter(text);
    let mut batch = ParsedBatch::default();

    let lines = text.lines().filter(|line| !line.trim().is_empty());
    for (index, line) in lines.enumerate() {
        let line_number = index + 1;
        let fields = tokenize_line(line, delimiter);
        let candidate = map_row(&fields, line_number);
        match validate(&candidate) {
            Ok(row) => batch.valid_rows.push(row),
            Err(invalid) => batch.invalid_rows.push(invalid),
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TSV: &str = "A1\t1\tA1-0101\t2PN\t50\t2\t1\t1000000\n\
                             A1\t2\tA1-0201\t2PN\t50\t2\t1\t1000000\n\
                             A1\t3\tA1-0301\t2PN\t50\t2\t1\t1000000\n\
                             A1\t4\tA1-0401\t2PN\t50\t2\t1\t1000000";

    #[test]
    fn test_accumulate_partition_is_exhaustive() {
        let batch = accumulate(VALID_TSV);
        assert_eq!(batch.total(), 4);
        assert_eq!(batch.valid_rows.len(), 4);
        assert!(batch.is_clean());
    }

    #[test]
    fn test_accumulate_four_valid_one_bad_area() {
        let text = format!("{}\nA1\t5\tA1-0501\t2PN\tbad\t2\t1\t1000000", VALID_TSV);
        let batch = accumulate(&text);

        assert_eq!(batch.valid_rows.len(), 4);
        assert_eq!(batch.invalid_rows.len(), 1);
        assert_eq!(batch.invalid_rows[0].row, 5);
    }

    #[test]
    fn test_accumulate_blank_lines_do_not_count() {
        let text = "A1\t1\tA1-0101\t2PN\t50\t2\t1\t1000000\n\
                    \n\
                    \t\t\n\
                    A1\tzero\tA1-0201\t2PN\t50\t2\t1\t1000000\n";
        let batch = accumulate(text);

        assert_eq!(batch.total(), 2);
        // The bad line is the 2nd non-blank line, not the 4th raw line
        assert_eq!(batch.invalid_rows[0].row, 2);
    }

    #[test]
    fn test_accumulate_crlf_input() {
        let text = "A1\t1\tA1-0101\t2PN\t50\t2\t1\t1000000\r\n\
                    A1\t2\tA1-0201\t2PN\t50\t2\t1\t1000000\r\n";
        let batch = accumulate(text);
        assert_eq!(batch.valid_rows.len(), 2);
    }

    #[test]
    fn test_accumulate_comma_batch_with_quoted_field() {
        let text = "A1,1,A1-0101,\"Duplex, góc\",50,2,1,1000000";
        let batch = accumulate(text);

        assert!(batch.is_clean());
        assert_eq!(batch.valid_rows[0].unit_type.as_deref(), Some("Duplex, góc"));
    }

    #[test]
    fn test_accumulate_preserves_input_order() {
        let text = "A1\t1\tA1-0101\t\t50\t\t\t100\n\
                    A1\tx\tA1-0201\t\t50\t\t\t100\n\
                    A1\t3\tA1-0301\t\t50\t\t\t100\n\
                    A1\ty\tA1-0401\t\t50\t\t\t100";
        let batch = accumulate(text);

        assert_eq!(
            batch.valid_rows.iter().map(|r| r.floor).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(
            batch.invalid_rows.iter().map(|r| r.row).collect::<Vec<_>>(),
            vec![2, 4]
        );
    }
}
