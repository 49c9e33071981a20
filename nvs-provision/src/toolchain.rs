// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Location of the ESP-IDF tools used to build and flash the partition.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ProvisionError;

/// Environment variable naming the ESP-IDF root.
pub const IDF_PATH_VAR: &str = "IDF_PATH";

/// Generator script, relative to the ESP-IDF root.
const GENERATOR_RELATIVE_PATH: [&str; 4] = [
    "components",
    "nvs_flash",
    "nvs_partition_generator",
    "nvs_partition_gen.py",
];

const PYTHON_PROGRAM: &str = "python";
const FLASHER_PROGRAM: &str = "esptool.py";

/// Resolved external tool locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub python: PathBuf,
    pub generator_script: PathBuf,
    pub flasher: PathBuf,
}

impl Toolchain {
    /// Read `IDF_PATH` from the process environment. Empty counts as unset.
    pub fn idf_path_from_env() -> Option<PathBuf> {
        env::var_os(IDF_PATH_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Derive tool locations from an ESP-IDF root and check the generator exists.
    pub fn resolve(idf_path: Option<&Path>) -> Result<Self, ProvisionError> {
        let idf_path = idf_path.ok_or(ProvisionError::IdfPathUnset)?;
        let generator_script = Self::generator_path(idf_path);

        if !generator_script.is_file() {
            return Err(ProvisionError::GeneratorMissing {
                path: generator_script,
            });
        }

        tracing::debug!(script = %generator_script.display(), "resolved NVS partition generator");

        Ok(Self {
            python: PathBuf::from(PYTHON_PROGRAM),
            generator_script,
            flasher: PathBuf::from(FLASHER_PROGRAM),
        })
    }

    /// Path of the generator script below `idf_path`, without checking it exists.
    pub fn generator_path(idf_path: &Path) -> PathBuf {
        GENERATOR_RELATIVE_PATH
            .iter()
            .fold(idf_path.to_path_buf(), |path, part| path.join(part))
    }
}
