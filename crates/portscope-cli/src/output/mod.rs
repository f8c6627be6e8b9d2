//! Banner row rendering.
//!
//! Turns one banner and an ordered field list into a single delimited text
//! row. Rendering is a pure function of the banner, the field list and the
//! [`RowFormat`], so the live search and offline parse paths produce
//! identical output for identical records.

pub mod pager;

use anyhow::Result;
use console::{Color, Style};
use portscope_core::{Banner, FieldValue};
use std::collections::HashMap;
use std::io::Write;

/// Inner separator joining the elements of a list-valued field.
const LIST_JOIN: &str = ";";

/// Per-field colors used when colorizing rendered rows.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<String, Color>,
    fallback: Color,
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = HashMap::new();
        colors.insert("ip_str".to_string(), Color::Green);
        colors.insert("port".to_string(), Color::Yellow);
        colors.insert("data".to_string(), Color::Cyan);
        colors.insert("hostnames".to_string(), Color::Magenta);
        colors.insert("org".to_string(), Color::Cyan);

        Self {
            colors,
            fallback: Color::White,
        }
    }
}

impl Palette {
    /// Style for one field name, falling back for unrecognized fields.
    ///
    /// Styling is forced; whether to colorize at all is decided by the
    /// caller through [`RowFormat::colorize`].
    fn style_for(&self, field: &str) -> Style {
        let color = self.colors.get(field).copied().unwrap_or(self.fallback);
        Style::new().fg(color).force_styling(true)
    }
}

/// How rendered rows are formatted.
#[derive(Debug, Clone)]
pub struct RowFormat {
    /// Separator appended after every emitted field
    pub separator: String,

    /// Whether to wrap field values in color directives
    pub colorize: bool,

    /// Field colors used when `colorize` is set
    pub palette: Palette,
}

impl Default for RowFormat {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
            colorize: false,
            palette: Palette::default(),
        }
    }
}

/// Render one banner as a delimited row.
///
/// Fields absent from the banner, or present but empty, are skipped
/// entirely. Every emitted value is followed by the separator, including
/// the last one. A banner with no renderable fields yields an empty string.
#[must_use]
pub fn render_row(banner: &Banner, fields: &[String], format: &RowFormat) -> String {
    let mut row = String::new();

    for field in fields {
        let Some(value) = banner.field(field) else {
            continue;
        };

        let text = match value {
            FieldValue::List(items) => items.join(LIST_JOIN),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => escape_field(&s),
        };

        if format.colorize {
            let styled = format.palette.style_for(field).apply_to(text);
            row.push_str(&styled.to_string());
        } else {
            row.push_str(&text);
        }
        row.push_str(&format.separator);
    }

    row
}

/// Escape free-text field content so a rendered row stays on one line.
///
/// Characters outside ASCII are replaced with `?`, then literal newlines,
/// carriage returns and tabs become two-character escape sequences.
#[must_use]
pub fn escape_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_ascii() => out.push(ch),
            _ => out.push('?'),
        }
    }

    out
}

/// Split a comma-separated field option into ordered column names.
///
/// Items are trimmed and empty items dropped; a list with no usable names
/// is rejected.
pub fn parse_fields(spec: &str) -> Result<Vec<String>> {
    let fields: Vec<String> = spec
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(String::from)
        .collect();

    if fields.is_empty() {
        anyhow::bail!("empty field list");
    }

    Ok(fields)
}

/// Render records one at a time, writing each as its own line.
///
/// The first malformed record or write failure aborts the run.
pub fn stream_rows<W: Write>(
    records: impl Iterator<Item = Result<Banner>>,
    fields: &[String],
    format: &RowFormat,
    out: &mut W,
) -> Result<()> {
    for record in records {
        let banner = record?;
        writeln!(out, "{}", render_row(&banner, fields, format))?;
    }

    Ok(())
}

/// Render every record into one buffer, one line per record.
///
/// Live search output goes to a pager, which wants the complete content
/// up front; result counts are capped at the search limit.
#[must_use]
pub fn collect_rows<'a>(
    records: impl IntoIterator<Item = &'a Banner>,
    fields: &[String],
    format: &RowFormat,
) -> String {
    let mut output = String::new();

    for banner in records {
        output.push_str(&render_row(banner, fields, format));
        output.push('\n');
    }

    output
}
