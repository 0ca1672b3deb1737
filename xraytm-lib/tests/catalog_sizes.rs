//! Exact packet layout sizes against the ICD field tables

use xraytm_lib::{PacketSize, Product, Ssid, bulk, quicklook};

#[test]
fn xray_level0_layout() {
    let PacketSize {
        fixed_bits,
        variable_bits,
    } = bulk::xray_level0(1);
    assert_eq!(fixed_bits, 224);
    assert_eq!(variable_bits, 32);
    // variable cost is linear in the sample count
    assert_eq!(bulk::xray_level0(10).variable_bits, 320);
}

#[test]
fn xray_level1_layout() {
    let size = bulk::xray_level1(2, 1, 3);
    // 16 bits of spare + pixel mask per pixel set
    assert_eq!(size.fixed_bits, 208 + 2 * 16);
    // one compressed count octet per (pixel set, detector mask) pair
    assert_eq!(size.variable_bits, 32 + 2 * 3 * 8);
}

#[test]
fn xray_level2_is_an_alias_of_level1() {
    for (pixel_sets, energy_groups, detector_masks) in [(1, 1, 1), (2, 4, 3), (12, 32, 32)] {
        assert_eq!(
            bulk::xray_level2(pixel_sets, energy_groups, detector_masks),
            bulk::xray_level1(pixel_sets, energy_groups, detector_masks),
        );
    }
}

#[test]
fn xray_level3_layout() {
    let size = bulk::xray_level3(1, 30);
    assert_eq!(size.fixed_bits, 272);
    // bounds + flux + detector count, then 24 bits of visibility per detector
    assert_eq!(size.variable_bits, 32 + 30 * 24);
}

#[test]
fn spectrogram_layout() {
    let size = bulk::spectrogram(1, 32);
    assert_eq!(size.fixed_bits, 104);
    assert_eq!(size.variable_bits, 32 + 32 * 8);
}

#[test]
fn aspect_layout() {
    let size = bulk::aspect(1);
    assert_eq!(size.fixed_bits, 80);
    // two channels, two diodes, 16 bits each
    assert_eq!(size.variable_bits, 64);
    assert_eq!(bulk::aspect(4).variable_bits, 256);
}

#[test]
fn light_curve_layout() {
    let size = quicklook::light_curve(5, 1);
    assert_eq!(size.fixed_bits, 288);
    assert_eq!(size.variable_bits, 56);
    assert_eq!(quicklook::light_curve(5, 2).variable_bits, 112);
    assert_eq!(size.total_bits(), 344);
}

#[test]
fn background_layout() {
    let size = quicklook::background(5, 1);
    assert_eq!(size.fixed_bits, 224);
    assert_eq!(size.variable_bits, 48);
}

#[test]
fn variance_layout() {
    let size = quicklook::variance(1);
    assert_eq!(size.fixed_bits, 184);
    // one compressed octet per sample
    assert_eq!(size.variable_bits, 8);
}

#[test]
fn spectra_layout() {
    let size = quicklook::spectra(1);
    assert_eq!(size.fixed_bits, 120);
    // detector index + 32 channels + trigger + integration count
    assert_eq!(size.variable_bits, 280);
}

#[test]
fn flare_flag_location_layout() {
    let size = quicklook::flare_flag_location(1);
    assert_eq!(size.fixed_bits, 88);
    assert_eq!(size.variable_bits, 24);
}

#[test]
fn flarelist_tm_mgmt_layout() {
    let size = quicklook::flarelist_tm_mgmt(1);
    assert_eq!(size.fixed_bits, 88);
    assert_eq!(size.variable_bits, 128);
}

#[test]
fn calibration_spectra_layout() {
    let size = quicklook::calibration_spectra(64, 1);
    assert_eq!(size.fixed_bits, 458);
    assert_eq!(size.variable_bits, 32 + 64 * 8);
}

#[test]
fn per_record_cost_never_shrinks_with_parameters() {
    assert!(quicklook::light_curve(6, 1).variable_bits > quicklook::light_curve(5, 1).variable_bits);
    assert!(quicklook::background(6, 1).variable_bits > quicklook::background(5, 1).variable_bits);
    assert!(bulk::spectrogram(1, 33).variable_bits > bulk::spectrogram(1, 32).variable_bits);
    assert!(bulk::xray_level1(3, 1, 3).variable_bits > bulk::xray_level1(2, 1, 3).variable_bits);
    assert!(bulk::xray_level1(2, 1, 4).variable_bits > bulk::xray_level1(2, 1, 3).variable_bits);
    assert!(bulk::xray_level3(1, 31).variable_bits > bulk::xray_level3(1, 30).variable_bits);
    // fixed overhead grows with the per-set and per-energy header tables
    assert!(quicklook::light_curve(6, 1).fixed_bits > quicklook::light_curve(5, 1).fixed_bits);
    assert!(bulk::xray_level1(3, 1, 3).fixed_bits > bulk::xray_level1(2, 1, 3).fixed_bits);
}

#[test]
fn product_dispatch_matches_catalog_functions() {
    assert_eq!(
        Product::LightCurve { energies: 5 }.packet_size(1),
        quicklook::light_curve(5, 1)
    );
    assert_eq!(
        Product::XrayLevel1 {
            pixel_sets: 2,
            detector_masks: 3
        }
        .packet_size(4),
        bulk::xray_level1(2, 4, 3)
    );
    assert_eq!(Product::Variance.packet_size(3), quicklook::variance(3));
    assert_eq!(
        Product::Spectrogram { energies: 32 }.packet_size(2),
        bulk::spectrogram(2, 32)
    );
    assert_eq!(Product::Aspect.packet_size(16), bulk::aspect(16));
}

#[test]
fn ssid_values_match_the_icd() {
    assert_eq!(u8::from(Ssid::XrayLevel0), 20);
    assert_eq!(u8::from(Ssid::Spectrogram), 24);
    assert_eq!(u8::from(Ssid::LightCurve), 30);
    assert_eq!(u8::from(Ssid::CalibrationSpectra), 41);
    assert_eq!(u8::from(Ssid::FlareListTmMgmt), 43);
    assert_eq!(Ssid::try_from(42), Ok(Ssid::Aspect));
    assert!(Ssid::try_from(99).is_err());

    assert_eq!(Product::Background { energies: 5 }.ssid(), Ssid::Background);
    assert_eq!(Product::XrayLevel2 { pixel_sets: 1, detector_masks: 1 }.ssid(), Ssid::XrayLevel2);
}
