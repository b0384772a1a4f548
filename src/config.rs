//! Company and bank identity used in the file and batch records.

use crate::error::{NachaError, Result};
use serde::Deserialize;
use std::io::Read;

/// Default batch entry description when none is configured.
pub const DEFAULT_ENTRY_DESCRIPTION: &str = "PAYROLL";

/// Configuration as it appears on disk.
///
/// Every key is optional here so that a missing one can be reported by name
/// instead of as a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    pub immediate_destination: Option<String>,
    pub immediate_destination_name: Option<String>,
    pub immediate_origin: Option<String>,
    pub immediate_origin_name: Option<String>,
    pub originating_dfi_identification: Option<String>,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub entry_description: Option<String>,
}

/// Validated NACHA configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NachaConfig {
    /// Receiving bank routing number.
    pub immediate_destination: String,
    pub immediate_destination_name: String,
    /// Origin identifier, usually the company's tax id or ODFI routing number.
    pub immediate_origin: String,
    pub immediate_origin_name: String,
    /// 8-digit ODFI identifier; prefix of every trace number.
    pub originating_dfi_identification: String,
    pub company_id: String,
    pub company_name: String,
    pub entry_description: String,
}

impl NachaConfig {
    /// Reads and validates a JSON configuration document.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawConfig = serde_json::from_reader(reader)?;
        NachaConfig::try_from(raw)
    }

    /// Parses and validates a JSON configuration string.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(input)?;
        NachaConfig::try_from(raw)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(NachaError::MissingConfigField { field }),
    }
}

impl TryFrom<RawConfig> for NachaConfig {
    type Error = NachaError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Ok(NachaConfig {
            immediate_destination: required(raw.immediate_destination, "immediate_destination")?,
            immediate_destination_name: required(
                raw.immediate_destination_name,
                "immediate_destination_name",
            )?,
            immediate_origin: required(raw.immediate_origin, "immediate_origin")?,
            immediate_origin_name: required(raw.immediate_origin_name, "immediate_origin_name")?,
            originating_dfi_identification: required(
                raw.originating_dfi_identification,
                "originating_dfi_identification",
            )?,
            company_id: required(raw.company_id, "company_id")?,
            company_name: required(raw.company_name, "company_name")?,
            entry_description: raw
                .entry_description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ENTRY_DESCRIPTION.to_string()),
        })
    }
}
