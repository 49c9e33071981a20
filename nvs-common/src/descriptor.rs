// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! CSV descriptor consumed by `nvs_partition_gen.py`.
//!
//! The generator reads a `key,type,encoding,value` table: one `namespace` row
//! opening the `wifi` namespace, followed by the string entries stored in it.
//! Values are quoted with RFC 4180 rules so credentials containing commas,
//! quotes or line breaks survive the trip through the generator's CSV reader.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::partition::{MAX_PASS_LEN, MAX_SSID_LEN, WIFI_NAMESPACE, WIFI_PASS_KEY, WIFI_SSID_KEY};

/// Errors raised while rendering or reading a descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV writer: {0}")]
    Flush(std::io::Error),
    #[error("descriptor is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Row type understood by the partition generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Namespace,
    Data,
}

/// Value encoding for `data` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    String,
}

/// One row of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NvsEntry {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub encoding: Option<Encoding>,
    pub value: Option<String>,
}

impl NvsEntry {
    pub fn namespace(name: &str) -> Self {
        Self {
            key: name.to_string(),
            kind: EntryKind::Namespace,
            encoding: None,
            value: None,
        }
    }

    pub fn string(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: EntryKind::Data,
            encoding: Some(Encoding::String),
            value: Some(value.to_string()),
        }
    }

    /// Row value, with an empty field read back as `""`.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// WiFi credentials written to the `wifi` namespace.
///
/// Nothing is validated here: the generator and the firmware are the
/// authorities on what an acceptable SSID or password is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub ssid: String,
    pub password: String,
}

impl Credentials {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }

    /// Descriptor rows in the order the generator expects them.
    pub fn entries(&self) -> [NvsEntry; 3] {
        [
            NvsEntry::namespace(WIFI_NAMESPACE),
            NvsEntry::string(WIFI_SSID_KEY, &self.ssid),
            NvsEntry::string(WIFI_PASS_KEY, &self.password),
        ]
    }

    /// Human-readable notes for values that overflow the firmware's read buffers.
    ///
    /// The buffers hold the NUL terminator too, so a value must stay one byte
    /// below the buffer size.
    pub fn length_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.ssid.len() >= MAX_SSID_LEN {
            warnings.push(format!(
                "SSID is {} bytes; the firmware reads at most {}",
                self.ssid.len(),
                MAX_SSID_LEN - 1
            ));
        }
        if self.password.len() >= MAX_PASS_LEN {
            warnings.push(format!(
                "password is {} bytes; the firmware reads at most {}",
                self.password.len(),
                MAX_PASS_LEN - 1
            ));
        }
        warnings
    }
}

/// Render the descriptor for `credentials`, header row included.
pub fn render_descriptor(credentials: &Credentials) -> Result<String, DescriptorError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for entry in credentials.entries() {
        writer.serialize(entry)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DescriptorError::Flush(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Read a descriptor back into its rows.
pub fn parse_descriptor(text: &str) -> Result<Vec<NvsEntry>, DescriptorError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<NvsEntry>, csv::Error>>()?;
    Ok(rows)
}
