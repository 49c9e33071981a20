// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Failure modes of a provisioning run.

use std::path::PathBuf;

use nvs_common::DescriptorError;
use thiserror::Error;

use crate::tools::Tool;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("IDF_PATH environment variable not set\nPlease run: export IDF_PATH=/path/to/esp-idf")]
    IdfPathUnset,

    #[error("Cannot find {}", path.display())]
    GeneratorMissing { path: PathBuf },

    #[error("Could not find ESP32 device\nPlease specify port manually with -p /dev/ttyUSB0")]
    DeviceNotFound,

    #[error("Error generating NVS binary ({}): {diagnostic}", exit_label(*code))]
    GeneratorFailed { code: Option<i32>, diagnostic: String },

    #[error("Error flashing device ({}): {diagnostic}", exit_label(*code))]
    FlasherFailed { code: Option<i32>, diagnostic: String },

    #[error("Failed to run {tool}")]
    Spawn {
        tool: Tool,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to prepare temporary file")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to write output")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
