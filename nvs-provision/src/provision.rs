// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Build the NVS image for a set of credentials and flash it.
//!
//! The CSV descriptor and the generated binary live in temporary files whose
//! guards delete them on drop, so every return path cleans up after itself.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use nvs_common::partition::{hex_arg, NVS_PARTITION_OFFSET, NVS_PARTITION_SIZE};
use nvs_common::{render_descriptor, Credentials};

use crate::error::ProvisionError;
use crate::toolchain::Toolchain;
use crate::tools::{Invocation, SystemRunner, Tool, ToolOutput, ToolRunner};

const TEMP_PREFIX: &str = "nvs-wifi-";

/// Drives the generator and flasher for one device.
pub struct Provisioner<R> {
    runner: R,
    idf_path: Option<PathBuf>,
    /// Where temporary files go; the system temp directory when unset.
    temp_dir: Option<PathBuf>,
}

impl Provisioner<SystemRunner> {
    /// Provisioner backed by real processes, with `IDF_PATH` from the environment.
    pub fn from_env() -> Self {
        Self::new(SystemRunner::new(), Toolchain::idf_path_from_env())
    }
}

impl<R: ToolRunner> Provisioner<R> {
    pub fn new(runner: R, idf_path: Option<PathBuf>) -> Self {
        Self {
            runner,
            idf_path,
            temp_dir: None,
        }
    }

    /// Place temporary files in `dir` instead of the system temp directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Write `credentials` to the NVS partition of the device on `port`.
    pub fn provision(
        &mut self,
        credentials: &Credentials,
        port: &str,
        out: &mut impl Write,
    ) -> Result<(), ProvisionError> {
        writeln!(out, "Provisioning WiFi credentials...")?;
        writeln!(out, "  SSID: {}", credentials.ssid)?;
        writeln!(out, "  Port: {}", port)?;

        for warning in credentials.length_warnings() {
            tracing::warn!("{}", warning);
        }

        let descriptor = render_descriptor(credentials)?;
        let temp_dir = self.temp_dir.as_deref();
        let csv_path = temp_file(temp_dir, ".csv", descriptor.as_bytes())?;
        let bin_path = temp_file(temp_dir, ".bin", &[])?;
        tracing::debug!(
            csv = %csv_path.display(),
            bin = %bin_path.display(),
            "created temporary files"
        );

        let toolchain = Toolchain::resolve(self.idf_path.as_deref())?;

        writeln!(out)?;
        writeln!(out, "Generating NVS partition binary...")?;
        let output = self.run(generate_invocation(&toolchain, &csv_path, &bin_path))?;
        if !output.success() {
            return Err(ProvisionError::GeneratorFailed {
                code: output.code,
                diagnostic: output.diagnostic(),
            });
        }
        writeln!(out, "✓ NVS binary generated")?;

        writeln!(out)?;
        writeln!(out, "Flashing to device on {}...", port)?;
        let output = self.run(flash_invocation(&toolchain, port, &bin_path))?;
        if !output.success() {
            return Err(ProvisionError::FlasherFailed {
                code: output.code,
                diagnostic: output.diagnostic(),
            });
        }

        writeln!(out, "✓ WiFi credentials flashed successfully!")?;
        writeln!(out)?;
        writeln!(out, "You can now flash and run the main firmware:")?;
        writeln!(out, "  idf.py -p {} flash monitor", port)?;

        Ok(())
    }

    fn run(&mut self, invocation: Invocation) -> Result<ToolOutput, ProvisionError> {
        tracing::info!(command = %invocation.display(), "running {}", invocation.tool);
        self.runner
            .run(&invocation)
            .map_err(|source| ProvisionError::Spawn {
                tool: invocation.tool,
                source,
            })
    }
}

/// `python nvs_partition_gen.py generate <csv> <bin> 0x6000`
fn generate_invocation(toolchain: &Toolchain, csv: &Path, bin: &Path) -> Invocation {
    Invocation::new(Tool::Generator, toolchain.python.clone())
        .arg(toolchain.generator_script.as_os_str())
        .arg("generate")
        .arg(csv.as_os_str())
        .arg(bin.as_os_str())
        .arg(hex_arg(NVS_PARTITION_SIZE))
}

/// `esptool.py --port <port> write_flash 0x9000 <bin>`
fn flash_invocation(toolchain: &Toolchain, port: &str, bin: &Path) -> Invocation {
    Invocation::new(Tool::Flasher, toolchain.flasher.clone())
        .arg("--port")
        .arg(port)
        .arg("write_flash")
        .arg(hex_arg(NVS_PARTITION_OFFSET))
        .arg(bin.as_os_str())
}

/// Create a closed temporary file holding `contents`, deleted when the guard drops.
fn temp_file(
    dir: Option<&Path>,
    suffix: &str,
    contents: &[u8],
) -> Result<TempPath, ProvisionError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_PREFIX).suffix(suffix);
    let mut file = match dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(ProvisionError::TempFile)?;
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(ProvisionError::TempFile)?;
    Ok(file.into_temp_path())
}
