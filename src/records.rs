//! NACHA record builders.
//!
//! Each builder returns one 94-character line. Column layout follows the
//! NACHA PPD credit format with a single batch per file.

use crate::config::NachaConfig;
use crate::format::{digits, number, split_routing, text, Align};
use crate::payroll::{EntryRecord, Mode, PayrollRun};
use chrono::{NaiveDate, NaiveDateTime};

/// Length of every record line.
pub const RECORD_SIZE: usize = 94;

/// Records per block.
pub const BLOCKING_FACTOR: usize = 10;

/// Largest amount, in cents, the entry detail amount field holds.
pub const MAX_ENTRY_CENTS: i64 = 9_999_999_999;

/// Largest total, in cents, the control record amount fields hold.
pub const MAX_TOTAL_CENTS: u64 = 999_999_999_999;

/// Service class code for a credits-only batch.
const SERVICE_CLASS_CREDITS: &str = "220";

/// Filler line used to complete the last block.
pub fn filler_record() -> String {
    "9".repeat(RECORD_SIZE)
}

/// Record type 1.
pub fn file_header(config: &NachaConfig, now: NaiveDateTime, mode: Mode) -> String {
    let line = [
        "1".to_string(),
        "01".to_string(),
        digits(&config.immediate_destination, 10),
        digits(&config.immediate_origin, 10),
        now.format("%y%m%d").to_string(),
        now.format("%H%M").to_string(),
        mode.file_id_modifier().to_string(),
        format!("{:03}", RECORD_SIZE),
        format!("{:02}", BLOCKING_FACTOR),
        "1".to_string(),
        text(&config.immediate_destination_name, 23, Align::Left),
        text(&config.immediate_origin_name, 23, Align::Left),
        " ".repeat(8),
    ]
    .concat();
    debug_assert_eq!(line.len(), RECORD_SIZE);
    line
}

/// Record type 5.
///
/// `effective` is the effective entry date: the run's period end date when
/// valid, otherwise the file creation date.
pub fn batch_header(run: &PayrollRun, config: &NachaConfig, effective: NaiveDate) -> String {
    let line = [
        "5".to_string(),
        SERVICE_CLASS_CREDITS.to_string(),
        text(&config.company_name, 16, Align::Left),
        " ".repeat(20),
        digits(&config.company_id, 10),
        "PPD".to_string(),
        text(&config.entry_description, 10, Align::Left),
        " ".repeat(6),
        effective.format("%y%m%d").to_string(),
        " ".repeat(3),
        "1".to_string(),
        digits(&config.originating_dfi_identification, 8),
        number(u64::from(run.batch_number), 7),
    ]
    .concat();
    debug_assert_eq!(line.len(), RECORD_SIZE);
    line
}

/// Record type 6.
///
/// `cents` must already be in `1..=MAX_ENTRY_CENTS`; `sequence` is the
/// 1-based position of this entry among the written entries.
pub fn entry_detail(entry: &EntryRecord, cents: i64, odfi: &str, sequence: u64) -> String {
    let (rdfi, check_digit) = split_routing(&entry.routing_number);
    let line = [
        "6".to_string(),
        entry.account_kind().credit_code().to_string(),
        rdfi,
        check_digit,
        text(&entry.account_number, 17, Align::Left),
        number(cents.max(0) as u64, 10),
        text(&entry.employee_id, 15, Align::Left),
        text(&entry.employee_name, 22, Align::Left),
        " ".repeat(2),
        "0".to_string(),
        trace_number(odfi, sequence),
    ]
    .concat();
    debug_assert_eq!(line.len(), RECORD_SIZE);
    line
}

/// ODFI identifier followed by a 7-digit sequence number.
pub fn trace_number(odfi: &str, sequence: u64) -> String {
    format!("{}{}", digits(odfi, 8), number(sequence, 7))
}

/// Aggregates shared by the batch and file control records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlTotals {
    pub entry_count: u64,
    pub entry_hash: String,
    pub total_credit_cents: u64,
}

/// Record type 8.
pub fn batch_control(totals: &ControlTotals, config: &NachaConfig, run: &PayrollRun) -> String {
    let line = [
        "8".to_string(),
        SERVICE_CLASS_CREDITS.to_string(),
        number(totals.entry_count, 6),
        digits(&totals.entry_hash, 10),
        number(0, 12),
        number(totals.total_credit_cents, 12),
        digits(&config.company_id, 10),
        " ".repeat(19),
        " ".repeat(6),
        digits(&config.originating_dfi_identification, 8),
        number(u64::from(run.batch_number), 7),
    ]
    .concat();
    debug_assert_eq!(line.len(), RECORD_SIZE);
    line
}

/// Record type 9.
///
/// `record_count` is the number of records in the file including this one,
/// before filler padding.
pub fn file_control(totals: &ControlTotals, record_count: usize) -> String {
    let line = [
        "9".to_string(),
        number(1, 6),
        number(block_count(record_count) as u64, 6),
        number(totals.entry_count, 8),
        digits(&totals.entry_hash, 10),
        number(0, 12),
        number(totals.total_credit_cents, 12),
        " ".repeat(39),
    ]
    .concat();
    debug_assert_eq!(line.len(), RECORD_SIZE);
    line
}

/// Number of blocks needed to hold `record_count` records.
pub fn block_count(record_count: usize) -> usize {
    record_count.div_ceil(BLOCKING_FACTOR)
}

/// Appends filler records until the line count is a whole number of blocks.
pub fn pad_blocks(records: &mut Vec<String>) {
    while records.len() % BLOCKING_FACTOR != 0 {
        records.push(filler_record());
    }
}
