//! Payroll run and entry models.

use crate::error::{NachaError, Result};
use crate::money::parse_cents;
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;

/// The payroll run a file is built for.
#[derive(Debug, Clone)]
pub struct PayrollRun {
    /// Batch number written to the batch header and control records.
    pub batch_number: u32,

    /// Pay period; its end date becomes the effective entry date.
    pub period: Option<Period>,
}

impl PayrollRun {
    /// Creates a run with the given batch number and no period.
    pub fn new(batch_number: u32) -> Self {
        PayrollRun {
            batch_number,
            period: None,
        }
    }

    /// Sets the period end date (`YYYYMMDD...`).
    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.period = Some(Period {
            end_date: Some(end_date.into()),
        });
        self
    }

    /// Parses the period end date, if present and valid.
    ///
    /// Only the first 8 characters are read and they must all be digits
    /// forming a real calendar date.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        let end = self.period.as_ref()?.end_date.as_deref()?;
        let head = end.get(..8)?;
        if !head.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        NaiveDate::parse_from_str(head, "%Y%m%d").ok()
    }
}

impl Default for PayrollRun {
    fn default() -> Self {
        PayrollRun::new(1)
    }
}

/// Pay period of a run.
#[derive(Debug, Clone, Default)]
pub struct Period {
    pub end_date: Option<String>,
}

/// One employee payment as read from CSV.
///
/// The amount stays a string until the file is built so that a malformed
/// value can be reported against its position instead of being dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryRecord {
    pub amount: String,
    pub routing_number: String,
    pub account_number: String,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: String,
}

impl EntryRecord {
    /// Parses the amount into cents.
    ///
    /// `index` is the zero-based position in the entry list, used in the error.
    pub fn amount_cents(&self, index: usize) -> Result<i64> {
        parse_cents(&self.amount).ok_or_else(|| NachaError::InvalidAmount {
            index,
            value: self.amount.clone(),
        })
    }

    /// Account type, defaulting to checking when unset.
    pub fn account_kind(&self) -> AccountType {
        self.account_type
            .as_deref()
            .map(AccountType::from_label)
            .unwrap_or(AccountType::Checking)
    }
}

/// Receiving account type; decides the credit transaction code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    /// `"checking"` in any case is checking; every other label is savings.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("checking") {
            AccountType::Checking
        } else {
            AccountType::Savings
        }
    }

    /// NACHA credit transaction code.
    pub fn credit_code(&self) -> &'static str {
        match self {
            AccountType::Checking => "22",
            AccountType::Savings => "32",
        }
    }
}

/// Test or production file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Test,
    Prod,
}

impl Mode {
    /// Lenient mapping: `"prod"` is production, anything else is test.
    pub fn from_label(label: &str) -> Self {
        if label == "prod" {
            Mode::Prod
        } else {
            Mode::Test
        }
    }

    /// File ID modifier written to the file header.
    pub fn file_id_modifier(&self) -> char {
        match self {
            Mode::Test => 'T',
            Mode::Prod => 'A',
        }
    }
}

impl FromStr for Mode {
    type Err = NachaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "test" => Ok(Mode::Test),
            "prod" => Ok(Mode::Prod),
            _ => Err(NachaError::InvalidMode(s.to_string())),
        }
    }
}
