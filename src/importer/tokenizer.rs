// ==========================================
// Pre-sale Unit Inventory - Line Tokenizer
// ==========================================
// Responsibility: delimiter auto-detection + splitting one raw line
// into positional field tokens
// ==========================================

/// Field delimiter of a bulk-import batch.
///
/// Chosen once per batch, never per line; mixed-delimiter input is not
/// supported and will misparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
}

/// Pick the delimiter for a whole batch of raw text.
///
/// Spreadsheet paste produces tab-separated cells, so any tab anywhere
/// wins. Comma is chosen only when no tabs exist. Single-column input
/// (neither character present) is treated as tab-separated; the row then
/// fails the column-count guard with a readable message instead of being
/// shredded on commas inside free text.
pub fn detect_delimiter(text: &str) -> Delimiter {
    if text.contains('\t') {
        Delimiter::Tab
    } else if text.contains(',') {
        Delimiter::Comma
    } else {
        Delimiter::Tab
    }
}

/// Split one line into field tokens.
///
/// Tab mode splits on the literal character; spreadsheet paste never
/// quotes tab-separated cells. Comma mode understands double-quoted
/// fields: surrounding quotes are stripped and an inner `""` unescapes
/// to `"`, so `A1,"Hello, World",3` yields three tokens. Empty fields
/// between consecutive commas are preserved as empty tokens.
///
/// Pure function; short lines pass through unchanged and are rejected
/// later by the row validator so the error stays at the row level.
pub fn tokenize_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    match delimiter {
        Delimiter::Tab => line.split('\t').map(str::to_string).collect(),
        Delimiter::Comma => tokenize_comma_line(line),
    }
}

fn tokenize_comma_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        let mut field = String::new();

        if chars.peek() == Some(&'"') {
            chars.next(); // opening quote
            loop {
                match chars.next() {
                    Some('"') => {
                        if chars.peek() == Some(&'"') {
                            chars.next(); // "" -> "
                            field.push('"');
                        } else {
                            break; // closing quote
                        }
                    }
                    Some(c) => field.push(c),
                    None => break, // unterminated quote: keep what we have
                }
            }
            // Trailing junk after the closing quote up to the comma is
            // carried into the field rather than silently dropped.
            while let Some(&c) = chars.peek() {
                if c == ',' {
                    break;
                }
                field.push(c);
                chars.next();
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c == ',' {
                    break;
                }
                field.push(c);
                chars.next();
            }
        }

        fields.push(field);

        match chars.next() {
            Some(',') => continue,
            _ => break,
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_tab_wins() {
        assert_eq!(detect_delimiter("A1\t5\tA1-0502"), Delimiter::Tab);
        // Tabs beat commas even when both are present
        assert_eq!(detect_delimiter("A1\t5,Hello"), Delimiter::Tab);
    }

    #[test]
    fn test_detect_delimiter_comma_without_tabs() {
        assert_eq!(detect_delimiter("A1,5,A1-0502"), Delimiter::Comma);
    }

    #[test]
    fn test_detect_delimiter_neither_defaults_to_tab() {
        assert_eq!(detect_delimiter("A1"), Delimiter::Tab);
    }

    #[test]
    fn test_tokenize_tab_no_quote_handling() {
        let tokens = tokenize_line("A1\t\"5\"\tA1-0502", Delimiter::Tab);
        assert_eq!(tokens, vec!["A1", "\"5\"", "A1-0502"]);
    }

    #[test]
    fn test_tokenize_comma_quoted_field_with_comma() {
        let tokens = tokenize_line("A1,\"Hello, World\",3", Delimiter::Comma);
        assert_eq!(tokens, vec!["A1", "Hello, World", "3"]);
    }

    #[test]
    fn test_tokenize_comma_escaped_quote() {
        let tokens = tokenize_line("\"say \"\"hi\"\"\",B", Delimiter::Comma);
        assert_eq!(tokens, vec!["say \"hi\"", "B"]);
    }

    #[test]
    fn test_tokenize_comma_empty_fields_preserved() {
        let tokens = tokenize_line("A1,,B", Delimiter::Comma);
        assert_eq!(tokens, vec!["A1", "", "B"]);
    }

    #[test]
    fn test_tokenize_comma_trailing_empty_field() {
        let tokens = tokenize_line("A1,B,", Delimiter::Comma);
        assert_eq!(tokens, vec!["A1", "B", ""]);
    }

    #[test]
    fn test_tokenize_short_line_passes_through() {
        let tokens = tokenize_line("A1", Delimiter::Tab);
        assert_eq!(tokens, vec!["A1"]);
    }
}
