//! Focused tests for capability flag derivation and the threshold table
//!
//! These tests verify that:
//! - Every flag flips at exactly its documented threshold
//! - The variant flag forces component_legacy regardless of version
//! - Version 0 degrades to the oldest feature set
//! - The threshold table is the single source of truth

use crate::probe::capabilities::Capabilities;
use crate::probe::thresholds::Threshold;
use strum::IntoEnumIterator;

#[test]
fn test_modern_baseline_server() {
    // "1.16.5" on a baseline server: components stay legacy without the
    // extended API, everything else is modern
    let caps = Capabilities::derive(1165, false);

    assert!(!caps.extended_api);
    assert!(caps.component_legacy);
    assert!(!caps.item_legacy);
    assert!(!caps.unbreakable_legacy);
    assert!(caps.pdc_supported);
}

#[test]
fn test_modern_extended_server() {
    // Same version with the extended API present: components go modern
    let caps = Capabilities::derive(1165, true);

    assert!(caps.extended_api);
    assert!(!caps.component_legacy);
    assert!(!caps.item_legacy);
    assert!(!caps.unbreakable_legacy);
    assert!(caps.pdc_supported);
}

#[test]
fn test_component_legacy_boundary() {
    // With the extended API, the flag tracks the TextComponents threshold
    assert!(Capabilities::derive(1164, true).component_legacy);
    assert!(!Capabilities::derive(1165, true).component_legacy);

    // Without it, the version never matters
    assert!(Capabilities::derive(u32::MAX, false).component_legacy);
}

#[test]
fn test_item_legacy_boundary() {
    assert!(Capabilities::derive(1129, false).item_legacy);
    assert!(!Capabilities::derive(1130, false).item_legacy);
}

#[test]
fn test_unbreakable_legacy_boundary() {
    assert!(Capabilities::derive(1109, false).unbreakable_legacy);
    assert!(!Capabilities::derive(1110, false).unbreakable_legacy);
}

#[test]
fn test_pdc_supported_boundary() {
    assert!(!Capabilities::derive(1139, false).pdc_supported);
    assert!(Capabilities::derive(1140, false).pdc_supported);
    assert!(!Capabilities::derive(1130, false).pdc_supported);
}

#[test]
fn test_version_zero_is_least_capable() {
    // Unparseable version strings degrade to 0: all legacy, no PDC
    for extended_api in [false, true] {
        let caps = Capabilities::derive(0, extended_api);
        assert!(caps.component_legacy);
        assert!(caps.item_legacy);
        assert!(caps.unbreakable_legacy);
        assert!(!caps.pdc_supported);
    }
}

#[test]
fn test_threshold_values() {
    assert_eq!(Threshold::UnbreakableMeta.version(), 1110);
    assert_eq!(Threshold::ItemFlattening.version(), 1130);
    assert_eq!(Threshold::PersistentData.version(), 1140);
    assert_eq!(Threshold::TextComponents.version(), 1165);
}

#[test]
fn test_threshold_table_is_ascending() {
    let versions: Vec<u32> = Threshold::iter().map(|t| t.version()).collect();
    let mut sorted = versions.clone();
    sorted.sort_unstable();

    assert_eq!(versions, sorted, "Threshold table should iterate in ascending order");
    assert_eq!(versions.len(), 4);
}

#[test]
fn test_threshold_names_display() {
    assert_eq!(Threshold::UnbreakableMeta.to_string(), "UnbreakableMeta");
    assert_eq!(Threshold::PersistentData.to_string(), "PersistentData");
}
