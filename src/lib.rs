//! # NACHA Payroll
//!
//! Builds NACHA PPD direct-deposit files from a payroll run, its employee
//! entries and the company's bank configuration.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Amounts are parsed with `rust_decimal` and
//!   rounded half away from zero to whole cents
//! - **Fixed-width records**: Every line is exactly 94 characters
//! - **Strict amounts, lenient identifiers**: A non-numeric amount fails the
//!   file; a malformed routing number degrades to zeros
//! - **Deterministic output**: Identical inputs and clock give identical bytes
//!
//! ## Example
//!
//! ```no_run
//! use nacha_payroll::{build_nacha_ppd, load_entries, Mode, NachaConfig, PayrollRun};
//! use std::fs::File;
//!
//! let config = NachaConfig::from_json_reader(File::open("config.json").unwrap()).unwrap();
//! let entries = load_entries(File::open("entries.csv").unwrap()).unwrap();
//! let run = PayrollRun::new(1).with_end_date("20240331");
//! let file = build_nacha_ppd(&run, &entries, &config, Mode::Test).unwrap();
//! file.write_to(std::io::stdout()).unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod money;
pub mod payroll;
pub mod records;

pub use builder::{build_nacha_ppd, build_nacha_ppd_at, load_entries, FileSummary, NachaFile};
pub use config::NachaConfig;
pub use error::{NachaError, Result};
pub use money::Amount;
pub use payroll::{AccountType, EntryRecord, Mode, PayrollRun, Period};
