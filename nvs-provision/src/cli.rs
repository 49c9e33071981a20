// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::io;

use anyhow::Result;
use clap::Parser;

use nvs_common::Credentials;

use crate::error::ProvisionError;
use crate::ports::{self, PortError};
use crate::provision::Provisioner;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "nvs-provision", version)]
#[command(about = "Provision WiFi credentials to ESP32 NVS partition")]
pub struct Cli {
    /// WiFi network SSID
    pub ssid: String,

    /// WiFi network password
    pub password: String,

    /// Serial port (auto-detect if not specified)
    #[arg(short, long)]
    pub port: Option<String>,
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let port = resolve_port(cli.port, ports::find_port)?;
    let credentials = Credentials::new(cli.ssid, cli.password);

    let mut stdout = io::stdout().lock();
    Provisioner::from_env().provision(&credentials, &port, &mut stdout)?;
    Ok(())
}

/// Use the explicit port, or auto-detect one with `detect`.
fn resolve_port(
    explicit: Option<String>,
    detect: impl FnOnce() -> Result<Option<String>, PortError>,
) -> Result<String, ProvisionError> {
    if let Some(port) = explicit {
        return Ok(port);
    }

    println!("Auto-detecting ESP32 serial port...");
    let found = detect().unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        eprintln!("{}", err.guidance());
        None
    });

    let port = found.ok_or(ProvisionError::DeviceNotFound)?;
    println!("✓ Found ESP32 on port: {}", port);
    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_port_flag() {
        let cli = Cli::try_parse_from(["nvs-provision", "HomeNet", "secret123", "-p", "COM3"])
            .unwrap();
        assert_eq!(cli.ssid, "HomeNet");
        assert_eq!(cli.password, "secret123");
        assert_eq!(cli.port.as_deref(), Some("COM3"));

        let cli = Cli::try_parse_from([
            "nvs-provision",
            "HomeNet",
            "secret123",
            "--port",
            "/dev/ttyACM0",
        ])
        .unwrap();
        assert_eq!(cli.port.as_deref(), Some("/dev/ttyACM0"));
    }

    #[test]
    fn port_is_optional() {
        let cli = Cli::try_parse_from(["nvs-provision", "HomeNet", "secret123"]).unwrap();
        assert_eq!(cli.port, None);
    }

    #[test]
    fn password_is_required() {
        assert!(Cli::try_parse_from(["nvs-provision", "HomeNet"]).is_err());
    }

    #[test]
    fn explicit_port_skips_detection() {
        let port = resolve_port(Some("/dev/ttyUSB7".into()), || {
            panic!("detection must not run when a port is given")
        })
        .unwrap();
        assert_eq!(port, "/dev/ttyUSB7");
    }

    #[test]
    fn detected_port_is_used() {
        let port = resolve_port(None, || Ok(Some("/dev/ttyUSB0".into()))).unwrap();
        assert_eq!(port, "/dev/ttyUSB0");
    }

    #[test]
    fn no_ports_asks_for_manual_port() {
        let err = resolve_port(None, || Ok(None)).unwrap_err();
        assert!(matches!(err, ProvisionError::DeviceNotFound));
        assert!(err.to_string().contains("-p /dev/ttyUSB0"));
    }

    #[test]
    fn enumeration_failure_is_treated_as_not_found() {
        let err = resolve_port(None, || {
            Err(PortError::EnumerationUnavailable(serialport::Error::new(
                serialport::ErrorKind::Unknown,
                "udev unavailable",
            )))
        })
        .unwrap_err();
        assert!(matches!(err, ProvisionError::DeviceNotFound));
    }
}
