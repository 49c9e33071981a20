// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and utilities for WiFi credential provisioning.
//!
//! Everything here is free of OS access so it can be tested directly:
//! - `partition`: NVS partition layout and the keys the gateway firmware reads
//! - `descriptor`: CSV descriptor consumed by `nvs_partition_gen.py`
//! - `usb`: known USB-UART bridge table and serial port selection

pub mod descriptor;
pub mod partition;
pub mod usb;

// Re-export commonly used types
pub use descriptor::{parse_descriptor, render_descriptor, Credentials, DescriptorError, NvsEntry};
pub use partition::{NVS_PARTITION_OFFSET, NVS_PARTITION_SIZE, WIFI_NAMESPACE};
pub use usb::{select_port, PortDescriptor, UsbBridge, KNOWN_BRIDGES};
