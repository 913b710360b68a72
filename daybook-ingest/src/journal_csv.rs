//! Write journal lines in the ledger's manual-journal import layout.

use anyhow::{Context, Result};
use daybook_core::JournalLine;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Column order of the import file
pub const JOURNAL_HEADERS: [&str; 6] = [
    "*Narration",
    "*Date",
    "Description",
    "*AccountCode",
    "*Tax Rate",
    "*Amount",
];

#[derive(Serialize)]
struct JournalRow<'a> {
    #[serde(rename = "*Narration")]
    narration: &'a str,
    #[serde(rename = "*Date")]
    date: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "*AccountCode")]
    account_code: &'a str,
    #[serde(rename = "*Tax Rate")]
    tax_rate: &'a str,
    #[serde(rename = "*Amount")]
    amount: String,
}

impl<'a> From<&'a JournalLine> for JournalRow<'a> {
    fn from(line: &'a JournalLine) -> Self {
        Self {
            narration: &line.narration,
            date: &line.date,
            description: &line.description,
            account_code: &line.account_code,
            tax_rate: &line.tax_rate,
            amount: line.amount_text(),
        }
    }
}

/// Write journal lines (header row first) to any writer.
pub fn write_journal<W: Write>(writer: W, lines: &[JournalLine]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    if lines.is_empty() {
        wtr.write_record(JOURNAL_HEADERS)?;
    }
    for line in lines {
        wtr.serialize(JournalRow::from(line))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the journal into it.
pub fn write_journal_csv(path: impl AsRef<Path>, lines: &[JournalLine]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_journal(file, lines).with_context(|| format!("writing {}", path.display()))
}
