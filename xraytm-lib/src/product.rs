use crate::{bulk, quicklook};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::Display;

/// Bit cost of one packet's worth of a telemetry product: the constant
/// header overhead plus the repeated-record payload.
///
/// Sizing at one record yields the per-record cost the packing step
/// divides by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketSize {
    /// Constant per-packet header overhead in bits.
    pub fixed_bits: u64,
    /// Cost of the repeated records in bits.
    pub variable_bits: u64,
}

impl PacketSize {
    /// Total cost of the packet contents in bits.
    pub fn total_bits(&self) -> u64 {
        self.fixed_bits + self.variable_bits
    }
}

/// Source/structure identifier distinguishing TM product variants within
/// the science data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Ssid {
    XrayLevel0 = 20,
    XrayLevel1 = 21,
    XrayLevel2 = 22,
    XrayLevel3 = 23,
    Spectrogram = 24,
    LightCurve = 30,
    Background = 31,
    Spectra = 32,
    Variance = 33,
    FlareFlagLocation = 34,
    CalibrationSpectra = 41,
    Aspect = 42,
    FlareListTmMgmt = 43,
}

/// One telemetry product from the size catalog, carrying the structural
/// parameters its packet layout scales with.
///
/// The repeated unit ("record") differs per product: a time sample for
/// most, an energy group for the compressed x-ray levels, a flare entry
/// for the flare list. Products whose layout ignores a parameter simply
/// do not carry it (variance and the flare products have no energy
/// count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Product {
    #[strum(to_string = "x-ray level 0")]
    XrayLevel0,
    #[strum(to_string = "x-ray level 1")]
    XrayLevel1 { pixel_sets: u64, detector_masks: u64 },
    #[strum(to_string = "x-ray level 2")]
    XrayLevel2 { pixel_sets: u64, detector_masks: u64 },
    #[strum(to_string = "x-ray level 3")]
    XrayLevel3 { detectors: u64 },
    #[strum(to_string = "spectrogram")]
    Spectrogram { energies: u64 },
    #[strum(to_string = "aspect")]
    Aspect,
    #[strum(to_string = "light curve")]
    LightCurve { energies: u64 },
    #[strum(to_string = "background")]
    Background { energies: u64 },
    #[strum(to_string = "variance")]
    Variance,
    #[strum(to_string = "spectra")]
    Spectra,
    #[strum(to_string = "flare flag/location")]
    FlareFlagLocation,
    #[strum(to_string = "flare list/TM mgmt")]
    FlareListTmMgmt,
    #[strum(to_string = "calibration spectra")]
    CalibrationSpectra { energies: u64 },
}

impl Product {
    /// Size this product's packet contents at `num_records` repeated
    /// records, dispatching to the catalog function for its layout.
    pub fn packet_size(&self, num_records: u64) -> PacketSize {
        match *self {
            Product::XrayLevel0 => bulk::xray_level0(num_records),
            Product::XrayLevel1 {
                pixel_sets,
                detector_masks,
            } => bulk::xray_level1(pixel_sets, num_records, detector_masks),
            Product::XrayLevel2 {
                pixel_sets,
                detector_masks,
            } => bulk::xray_level2(pixel_sets, num_records, detector_masks),
            Product::XrayLevel3 { detectors } => bulk::xray_level3(num_records, detectors),
            Product::Spectrogram { energies } => bulk::spectrogram(num_records, energies),
            Product::Aspect => bulk::aspect(num_records),
            Product::LightCurve { energies } => quicklook::light_curve(energies, num_records),
            Product::Background { energies } => quicklook::background(energies, num_records),
            Product::Variance => quicklook::variance(num_records),
            Product::Spectra => quicklook::spectra(num_records),
            Product::FlareFlagLocation => quicklook::flare_flag_location(num_records),
            Product::FlareListTmMgmt => quicklook::flarelist_tm_mgmt(num_records),
            Product::CalibrationSpectra { energies } => {
                quicklook::calibration_spectra(energies, num_records)
            }
        }
    }

    /// Source/structure identifier of this product on the wire.
    pub fn ssid(&self) -> Ssid {
        match self {
            Product::XrayLevel0 => Ssid::XrayLevel0,
            Product::XrayLevel1 { .. } => Ssid::XrayLevel1,
            Product::XrayLevel2 { .. } => Ssid::XrayLevel2,
            Product::XrayLevel3 { .. } => Ssid::XrayLevel3,
            Product::Spectrogram { .. } => Ssid::Spectrogram,
            Product::Aspect => Ssid::Aspect,
            Product::LightCurve { .. } => Ssid::LightCurve,
            Product::Background { .. } => Ssid::Background,
            Product::Variance => Ssid::Variance,
            Product::Spectra => Ssid::Spectra,
            Product::FlareFlagLocation => Ssid::FlareFlagLocation,
            Product::FlareListTmMgmt => Ssid::FlareListTmMgmt,
            Product::CalibrationSpectra { .. } => Ssid::CalibrationSpectra,
        }
    }
}
