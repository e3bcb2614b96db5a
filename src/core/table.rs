//! Decoding of the service's CSV-like response bodies.
//!
//! Successful tabular payloads look like
//!
//! ```text
//! date,open,close,high,low,volume,money
//! 2018-07-09,9.27,9.50,9.53,9.27,22407527,212109327.00
//! ```
//!
//! while failures arrive as a single line of text with a 200 status. A header check is
//! therefore the only way to tell data from an error message.

use std::str::FromStr;

use crate::core::JqError;

/// A header-validated tabular response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parses `body`, requiring its first line to equal `expected` exactly.
    ///
    /// A zero-length body or a header-only body yields an empty table.
    pub fn parse(body: &str, expected: &str) -> Result<Self, JqError> {
        Self::parse_inner(body, Some(expected))
    }

    /// Parses `body` taking whatever its first line is as the header.
    ///
    /// For pass-through endpoints whose columns are not fixed in advance.
    pub fn parse_any(body: &str) -> Result<Self, JqError> {
        Self::parse_inner(body, None)
    }

    fn parse_inner(body: &str, expected: Option<&str>) -> Result<Self, JqError> {
        if body.trim().is_empty() {
            return Ok(Table {
                header: expected.map(split_fields).unwrap_or_default(),
                rows: Vec::new(),
            });
        }

        let mut lines = body.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));
        let first = lines.next().unwrap_or_default();

        if let Some(expected) = expected
            && first != expected
        {
            return Err(JqError::HeaderMismatch {
                expected: expected.to_string(),
                found: first.to_string(),
            });
        }

        let header = split_fields(first);
        let mut rows = Vec::new();
        for (idx, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }
            let fields = split_fields(line);
            if fields.len() != header.len() {
                return Err(JqError::RowArityMismatch {
                    // header is line 1
                    line: idx + 2,
                    expected: header.len(),
                    found: fields.len(),
                });
            }
            rows.push(fields);
        }

        Ok(Table { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates data rows with their 1-based line numbers.
    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(|(i, fields)| Row {
            header: &self.header,
            fields,
            line: i + 2,
        })
    }

    /// Maps every row into `R`.
    ///
    /// The table's header must be `R::HEADER`; positional mapping is only trusted after that check.
    pub fn records<R: FromRow>(&self) -> Result<Vec<R>, JqError> {
        let expected = split_fields(R::HEADER);
        if self.header != expected {
            return Err(JqError::HeaderMismatch {
                expected: R::HEADER.to_string(),
                found: self.header.join(","),
            });
        }
        self.iter().map(|row| R::from_row(&row)).collect()
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// One data row, borrowed from a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    header: &'a [String],
    fields: &'a [String],
    line: usize,
}

impl<'a> Row<'a> {
    /// 1-based line number in the response body.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn fields(&self) -> &'a [String] {
        self.fields
    }

    /// Raw text of column `idx`.
    pub fn text(&self, idx: usize) -> &'a str {
        self.fields.get(idx).map_or("", String::as_str)
    }

    /// Raw text of the named column, if present.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.header.iter().position(|h| h == column)?;
        Some(self.text(idx))
    }

    /// Column `idx` parsed as a number.
    pub fn number<T: FromStr>(&self, idx: usize) -> Result<T, JqError> {
        let raw = self.text(idx);
        raw.trim()
            .parse::<T>()
            .map_err(|_| JqError::NumericConversion {
                column: self.header.get(idx).cloned().unwrap_or_default(),
                value: raw.to_string(),
                line: self.line,
            })
    }

    /// Like [`Row::number`], but an empty field maps to `None`.
    pub fn opt_number<T: FromStr>(&self, idx: usize) -> Result<Option<T>, JqError> {
        if self.text(idx).trim().is_empty() {
            return Ok(None);
        }
        self.number(idx).map(Some)
    }
}

/// A record type decoded from one row of a fixed-header table.
pub trait FromRow: Sized {
    /// Exact header line the service sends for this record.
    const HEADER: &'static str;

    fn from_row(row: &Row<'_>) -> Result<Self, JqError>;
}

/// Parses a tabular body directly into records of type `R`.
pub fn parse_records<R: FromRow>(body: &str) -> Result<Vec<R>, JqError> {
    Table::parse(body, R::HEADER)?.records()
}
