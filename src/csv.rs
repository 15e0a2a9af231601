//! CSV tokenizing and table parsing for spreadsheet exports
//!
//! The grammar is deliberately small: comma delimiters, double quotes toggle
//! quoted mode, first non-blank line is the header row. Doubled quotes inside a
//! quoted field (`""`) are NOT unescaped; each quote simply toggles the mode.

/// One data row of a parsed table, keyed by header name.
///
/// Cells keep the header order of the source line so that callers needing
/// positional access (the key/value config sheet) can still get it.
/// Header names are kept exactly as they appear in the export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    /// Build a row from `(header, value)` pairs in column order
    pub fn new<H, V>(cells: impl IntoIterator<Item = (H, V)>) -> Self
    where
        H: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|(h, v)| (h.into(), v.into()))
                .collect(),
        }
    }

    /// Value stored under `header`
    ///
    /// When a header appears twice the right-most column wins.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .rev()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    /// Value of the column at `index`, ignoring header names
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell is empty
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, v)| v.is_empty())
    }
}

/// A parsed table: the header line plus its data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl Table {
    /// The header line re-read as a data row (values are the header cells)
    ///
    /// Headerless sheets lose their first record to the header line; this
    /// gives it back to callers that know how to recognise it.
    pub fn header_row(&self) -> RawRow {
        RawRow::new(self.headers.iter().map(|h| (h.clone(), h.clone())))
    }
}

/// Split one line into trimmed cells
///
/// The last field is always emitted, so an empty line yields `[""]`.
/// An unmatched quote leaves the tokenizer in quoted mode until the end of
/// the line; the remaining text becomes the final cell.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(finish_field(&current));
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(finish_field(&current));

    fields
}

fn finish_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}

/// Parse a full export into header-keyed rows
///
/// Blank lines are skipped, rows whose cells are all empty are dropped and
/// missing trailing cells default to the empty string. Returns an empty list
/// when the text has no header line.
pub fn parse_table(text: &str) -> Vec<RawRow> {
    parse_table_with_headers(text)
        .map(|table| table.rows)
        .unwrap_or_default()
}

/// Like [`parse_table`] but also returns the header line
///
/// Returns `None` when the text contains no non-blank line at all.
pub fn parse_table_with_headers(text: &str) -> Option<Table> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let headers = tokenize_line(lines.next()?);

    let rows = lines
        .map(|line| {
            let mut values = tokenize_line(line).into_iter();
            RawRow::new(
                headers
                    .iter()
                    .map(|h| (h.clone(), values.next().unwrap_or_default())),
            )
        })
        .filter(|row| !row.is_blank())
        .collect();

    Some(Table { headers, rows })
}
