// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Known ESP32 USB-UART bridges and serial port selection.

/// A USB-UART bridge chip commonly found on ESP32 boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbBridge {
    pub vid: u16,
    pub name: &'static str,
}

/// Bridges recognized during auto-detection. Matching is by vendor ID only.
pub const KNOWN_BRIDGES: &[UsbBridge] = &[
    UsbBridge {
        vid: 0x0403,
        name: "FTDI",
    },
    UsbBridge {
        vid: 0x10C4,
        name: "Silicon Labs CP210x",
    },
    UsbBridge {
        vid: 0x1A86,
        name: "WinChipHead CH340",
    },
    UsbBridge {
        vid: 0x303A,
        name: "Espressif native USB",
    },
];

/// A serial port as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDescriptor {
    pub path: String,
    /// USB vendor ID, absent for non-USB ports.
    pub vid: Option<u16>,
    pub pid: Option<u16>,
}

impl PortDescriptor {
    pub fn new(path: impl Into<String>, vid: Option<u16>, pid: Option<u16>) -> Self {
        Self {
            path: path.into(),
            vid,
            pid,
        }
    }

    /// The known bridge behind this port, if any.
    pub fn bridge(&self) -> Option<&'static UsbBridge> {
        let vid = self.vid?;
        KNOWN_BRIDGES.iter().find(|bridge| bridge.vid == vid)
    }
}

/// Pick the port to provision.
///
/// Returns the first port (in enumeration order) behind a known bridge,
/// else the first port at all, else `None`.
pub fn select_port(ports: &[PortDescriptor]) -> Option<&PortDescriptor> {
    ports
        .iter()
        .find(|port| port.bridge().is_some())
        .or_else(|| ports.first())
}
