// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! NVS partition layout and WiFi storage keys shared with the gateway firmware.

// --- Flash layout constants ---

/// Flash offset of the `nvs` partition in the default ESP32 partition table.
pub const NVS_PARTITION_OFFSET: u32 = 0x9000;

/// Size of the generated NVS image (24 KiB).
pub const NVS_PARTITION_SIZE: u32 = 0x6000;

// --- Firmware storage keys ---

pub const WIFI_NAMESPACE: &str = "wifi";
pub const WIFI_SSID_KEY: &str = "ssid";
pub const WIFI_PASS_KEY: &str = "pass";

// --- Firmware read buffer sizes (NUL terminator included) ---

pub const MAX_SSID_LEN: usize = 32;
pub const MAX_PASS_LEN: usize = 64;

/// Format a flash address or size the way the vendor tools expect it (`0x9000`).
pub fn hex_arg(value: u32) -> String {
    format!("0x{:x}", value)
}
