//! Output table persistence.
//!
//! The table is a CSV with a header row and fixed column order:
//! `id,created_utc,subreddit,title,body,score,emails,phones,url,saved_at`.
//! One whole-batch write per run, overwriting any previous file. A write
//! failure is the only fatal error in the pipeline.

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::LeadRecord;

/// Write all records, in the order given, overwriting `path`.
pub fn save_leads(path: &Path, records: &[LeadRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open output table {:?}", path))?;

    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("failed to write lead {}", record.id))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush output table {:?}", path))?;
    Ok(())
}

/// Read a previously written table back, in file order.
pub fn load_leads(path: &Path) -> Result<Vec<LeadRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open leads table {:?}", path))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: LeadRecord = row.context("failed to parse leads table row")?;
        records.push(record);
    }
    Ok(records)
}
