//! NACHA PPD file assembly.
//!
//! Builds the file header, one batch of credit entries, the batch and file
//! control records and block filler in a single pass over the entry list.
//! All running state lives in a per-call accumulator.

use crate::config::NachaConfig;
use crate::error::{NachaError, Result};
use crate::format::{digits, entry_hash, split_routing};
use crate::payroll::{EntryRecord, Mode, PayrollRun};
use crate::records::{
    batch_control, batch_header, block_count, entry_detail, file_control, file_header,
    pad_blocks, ControlTotals, BLOCKING_FACTOR, MAX_ENTRY_CENTS, MAX_TOTAL_CENTS,
};
use chrono::{Local, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use log::{debug, info};
use std::fmt;
use std::io::{Read, Write};

/// Aggregates of a built file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// Entry detail records written.
    pub entry_count: u64,
    /// Entries dropped for a non-positive amount.
    pub skipped_count: u64,
    pub entry_hash: String,
    pub total_credit_cents: u64,
    /// Records before filler padding.
    pub record_count: usize,
    pub block_count: usize,
}

/// A complete NACHA file, padded to whole blocks.
#[derive(Debug, Clone)]
pub struct NachaFile {
    records: Vec<String>,
    summary: FileSummary,
}

impl NachaFile {
    /// Record lines in file order, filler included.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn summary(&self) -> &FileSummary {
        &self.summary
    }

    /// Writes the file with one record per line and a trailing newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for record in &self.records {
            writer.write_all(record.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for NachaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Running state threaded through the entry records.
#[derive(Debug, Default)]
struct BatchAccumulator {
    lines: Vec<String>,
    rdfi_ids: Vec<String>,
    total_credit_cents: u64,
    sequence: u64,
    skipped: u64,
}

impl BatchAccumulator {
    /// Adds one entry, writing a detail record if its amount is positive.
    fn push(&mut self, index: usize, entry: &EntryRecord, odfi: &str) -> Result<()> {
        let cents = entry.amount_cents(index)?;
        if cents <= 0 {
            debug!(
                "Entry {}: Skipping employee {:?} with non-positive amount {}",
                index, entry.employee_id, entry.amount
            );
            self.skipped += 1;
            return Ok(());
        }

        if cents > MAX_ENTRY_CENTS {
            return Err(NachaError::AmountOutOfRange { index, cents });
        }
        let total = self.total_credit_cents + cents as u64;
        if total > MAX_TOTAL_CENTS {
            return Err(NachaError::TotalOutOfRange { index });
        }

        self.sequence += 1;
        let (rdfi, _) = split_routing(&entry.routing_number);
        self.lines.push(entry_detail(entry, cents, odfi, self.sequence));
        self.rdfi_ids.push(rdfi);
        self.total_credit_cents = total;

        debug!(
            "Entry {}: Credited {} cents to employee {:?} (trace sequence {})",
            index, cents, entry.employee_id, self.sequence
        );
        Ok(())
    }

    fn totals(&self) -> ControlTotals {
        ControlTotals {
            entry_count: self.lines.len() as u64,
            entry_hash: entry_hash(&self.rdfi_ids[..]),
            total_credit_cents: self.total_credit_cents,
        }
    }
}

/// Builds a NACHA PPD credit file stamped with the local clock.
pub fn build_nacha_ppd(
    run: &PayrollRun,
    entries: &[EntryRecord],
    config: &NachaConfig,
    mode: Mode,
) -> Result<NachaFile> {
    build_nacha_ppd_at(run, entries, config, mode, Local::now().naive_local())
}

/// Builds a NACHA PPD credit file stamped with `now`.
///
/// Entries with an amount of zero or less after rounding to cents are left
/// out entirely. Any amount that is not a number, or that does not fit its
/// record field, fails the whole file.
pub fn build_nacha_ppd_at(
    run: &PayrollRun,
    entries: &[EntryRecord],
    config: &NachaConfig,
    mode: Mode,
    now: NaiveDateTime,
) -> Result<NachaFile> {
    let odfi = digits(&config.originating_dfi_identification, 8);
    let effective = run.effective_date().unwrap_or_else(|| {
        debug!("No valid period end date, using creation date as effective date");
        now.date()
    });

    let mut batch = BatchAccumulator::default();
    for (index, entry) in entries.iter().enumerate() {
        batch.push(index, entry, &odfi)?;
    }
    let totals = batch.totals();

    let mut records = Vec::with_capacity(batch.lines.len() + BLOCKING_FACTOR);
    records.push(file_header(config, now, mode));
    records.push(batch_header(run, config, effective));
    records.append(&mut batch.lines);
    records.push(batch_control(&totals, config, run));
    let record_count = records.len() + 1;
    records.push(file_control(&totals, record_count));
    pad_blocks(&mut records);

    let summary = FileSummary {
        entry_count: totals.entry_count,
        skipped_count: batch.skipped,
        entry_hash: totals.entry_hash,
        total_credit_cents: totals.total_credit_cents,
        record_count,
        block_count: block_count(record_count),
    };
    info!(
        "Built NACHA file: {} entries ({} skipped), {} cents credited, {} blocks",
        summary.entry_count, summary.skipped_count, summary.total_credit_cents, summary.block_count
    );

    Ok(NachaFile { records, summary })
}

/// Reads payroll entries from CSV.
///
/// Unlike a best-effort import, a malformed row fails the whole load: a
/// payment file must not silently omit an employee.
pub fn load_entries<R: Read>(reader: R) -> Result<Vec<EntryRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in csv_reader.deserialize::<EntryRecord>() {
        entries.push(result?);
    }
    debug!("Loaded {} payroll entries", entries.len());
    Ok(entries)
}
