// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial port auto-detection.

use serialport::{SerialPortInfo, SerialPortType};
use thiserror::Error;

use nvs_common::usb::{select_port, PortDescriptor};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("serial port enumeration is unavailable: {0}")]
    EnumerationUnavailable(#[source] serialport::Error),
}

impl PortError {
    /// What the user can do about it.
    pub fn guidance(&self) -> &'static str {
        if cfg!(target_os = "linux") {
            "Install libudev (e.g. apt install libudev-dev) and check access to /dev/tty*"
        } else {
            "Check that the USB-serial driver is installed and the device is visible to the OS"
        }
    }
}

/// Find the serial port of the attached ESP32.
pub fn find_port() -> Result<Option<String>, PortError> {
    let ports = serialport::available_ports().map_err(PortError::EnumerationUnavailable)?;
    let descriptors: Vec<PortDescriptor> = ports.iter().map(describe).collect();
    tracing::debug!(count = descriptors.len(), "enumerated serial ports");

    let selected = select_port(&descriptors);
    if let Some(port) = selected {
        match port.bridge() {
            Some(bridge) => {
                tracing::debug!(
                    port = %port.path,
                    bridge = bridge.name,
                    "matched USB bridge"
                );
            }
            None => {
                tracing::warn!(
                    port = %port.path,
                    "no known USB bridge found, using first port"
                );
            }
        }
    }

    Ok(selected.map(|port| port.path.clone()))
}

fn describe(info: &SerialPortInfo) -> PortDescriptor {
    match &info.port_type {
        SerialPortType::UsbPort(usb) => {
            PortDescriptor::new(info.port_name.clone(), Some(usb.vid), Some(usb.pid))
        }
        _ => PortDescriptor::new(info.port_name.clone(), None, None),
    }
}
