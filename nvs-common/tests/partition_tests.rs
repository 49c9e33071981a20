// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for partition layout constants.

use nvs_common::partition::{
    hex_arg, MAX_PASS_LEN, MAX_SSID_LEN, NVS_PARTITION_OFFSET, NVS_PARTITION_SIZE,
    WIFI_NAMESPACE, WIFI_PASS_KEY, WIFI_SSID_KEY,
};

// --- Flash layout constants tests ---

#[test]
fn test_nvs_partition_offset() {
    assert_eq!(NVS_PARTITION_OFFSET, 0x9000);
}

#[test]
fn test_nvs_partition_size() {
    assert_eq!(NVS_PARTITION_SIZE, 24 * 1024); // 24KB
}

#[test]
fn test_partition_is_sector_aligned() {
    assert_eq!(NVS_PARTITION_OFFSET % 4096, 0);
    assert_eq!(NVS_PARTITION_SIZE % 4096, 0);
}

#[test]
fn test_partition_ends_before_app_partition() {
    // Default partition table puts phy_init at 0xF000
    assert!(NVS_PARTITION_OFFSET + NVS_PARTITION_SIZE <= 0xF000);
}

// --- Firmware keys ---

#[test]
fn test_wifi_keys_match_firmware() {
    assert_eq!(WIFI_NAMESPACE, "wifi");
    assert_eq!(WIFI_SSID_KEY, "ssid");
    assert_eq!(WIFI_PASS_KEY, "pass");
}

#[test]
fn test_firmware_buffer_limits() {
    assert_eq!(MAX_SSID_LEN, 32);
    assert_eq!(MAX_PASS_LEN, 64);
}

// --- Tool argument formatting ---

#[test]
fn test_hex_arg_formats_layout() {
    assert_eq!(hex_arg(NVS_PARTITION_OFFSET), "0x9000");
    assert_eq!(hex_arg(NVS_PARTITION_SIZE), "0x6000");
}
