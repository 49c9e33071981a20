// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! WiFi provisioning tool: writes credentials to the ESP32 NVS partition.
//!
//! Usage:
//!   nvs-provision HomeNet secret123
//!   nvs-provision HomeNet secret123 --port /dev/ttyUSB0
//!
//! Requires `IDF_PATH` to point at an ESP-IDF checkout and `esptool.py` on `PATH`.

mod cli;
mod error;
mod logging;
mod ports;
mod provision;
mod toolchain;
mod tools;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    logging::init();

    let args = cli::Cli::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "provisioning aborted");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
