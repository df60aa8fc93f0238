/// Split CSV text into raw rows of fields.
///
/// A single left-to-right scan with one character of lookahead:
///
/// - Outside quotes, `,` ends a field, `\n` ends a field and a row, `\r` is
///   dropped and `"` enters quoted mode.
/// - Inside quotes, `""` is an escaped quote, a lone `"` leaves quoted mode,
///   and every other character (including `,` and `\n`) is kept literally.
///
/// The final field and row are flushed at end of input even without a
/// trailing newline, so the result always has at least one row. An
/// unterminated quote is not an error: whatever was accumulated is kept.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\r' => {}
            _ => field.push(c),
        }
    }

    row.push(field);
    rows.push(row);
    rows
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn test_parse_simple_rows() {
        let rows = parse("num,name\n1,大山康晴\n2,升田幸三");
        assert_eq!(
            rows,
            vec![
                vec!["num", "name"],
                vec!["1", "大山康晴"],
                vec!["2", "升田幸三"],
            ]
        );
    }

    #[test]
    fn test_parse_quoted_comma_newline_and_escaped_quote() {
        let rows = parse("\"a,b\n\"\"c\"\"\"");
        assert_eq!(rows, vec![vec!["a,b\n\"c\"".to_string()]]);
    }

    #[test]
    fn test_parse_drops_carriage_returns() {
        let rows = parse("a,b\r\nc,d\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"], vec![""]]);
    }

    #[test]
    fn test_parse_trailing_newline_yields_empty_row() {
        let rows = parse("a\n");
        assert_eq!(rows, vec![vec!["a"], vec![""]]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), vec![vec![String::new()]]);
    }

    #[test]
    fn test_parse_empty_fields() {
        assert_eq!(parse(",,"), vec![vec!["", "", ""]]);
    }

    #[test]
    fn test_parse_quotes_inside_unquoted_field() {
        // A quote in the middle of a field still toggles quoted mode.
        assert_eq!(parse("ab\"c,d\"e,f"), vec![vec!["abc,de", "f"]]);
    }

    #[test]
    fn test_parse_unterminated_quote_is_flushed() {
        assert_eq!(parse("x,\"open,field\nnext"), vec![vec!["x", "open,field\nnext"]]);
    }
}
