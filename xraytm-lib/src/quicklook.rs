//! Quicklook (QL) telemetry packet layouts.
//!
//! Quicklook products are the low-resolution, high-cadence summaries:
//! light curves, background, variance, spectra, flare flag and location,
//! the flare list / TM management status, and the energy calibration
//! spectra. Field widths follow the instrument TM/TC interface control
//! document; compressed values are sized at their worst-case octet
//! widths.

use crate::product::PacketSize;

/// Size of a QL light curve packet.
pub fn light_curve(num_energies: u64, num_samples: u64) -> PacketSize {
    let fixed_bits = 8  // SSID
        + 32            // SCET coarse time
        + 16            // SCET fine time
        + 16            // integration time
        + 32            // detector mask
        + 4             // spare
        + 12            // pixel mask
        + 1             // spare
        + 1 + 3 + 3     // compression schema, light curves (S, K, M)
        + 1 + 3 + 3     // compression schema, triggers (S, K, M)
        + 1             // energy bin mask upper boundary
        + 32            // energy bin mask lower boundary
        + 8             // number of energies
        + num_energies * 16 // data points per energy
        + 16            // number of trigger data points
        + 16;           // number of RCR data points

    let variable_bits = num_samples
        * (num_energies * 8 // compressed light curves
            + 8         // compressed triggers
            + 8);       // RCR

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of a QL background monitor packet.
///
/// Same shape as the light curves minus the pixel-specific fields.
pub fn background(num_energies: u64, num_samples: u64) -> PacketSize {
    let fixed_bits = 8  // SSID
        + 32            // SCET coarse time
        + 16            // SCET fine time
        + 16            // integration time
        + 1 + 3 + 3     // compression schema, background (S, K, M)
        + 1 + 3 + 3     // compression schema, triggers (S, K, M)
        + 1             // energy bin mask upper boundary
        + 32            // energy bin mask lower boundary
        + 1             // spare
        + 8             // number of energies
        + num_energies * 16 // data points per energy
        + 16;           // number of trigger data points

    let variable_bits = num_samples
        * (num_energies * 8 // compressed background
            + 8);       // compressed triggers

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of a QL variance packet. One compressed data point per sample.
pub fn variance(num_samples: u64) -> PacketSize {
    let fixed_bits = 8  // SSID
        + 32            // SCET coarse time
        + 16            // SCET fine time
        + 16            // integration time
        + 8             // samples per variance
        + 32            // detector mask
        + 32            // energy mask
        + 4             // spare
        + 12            // pixel mask
        + 1             // spare
        + 1 + 3 + 3     // compression schema, variance (S, K, M)
        + 16;           // number of data points

    let variable_bits = num_samples * 8; // compressed variance

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of a QL spectra packet.
///
/// Each sample is one detector's full 32-channel spectrum.
pub fn spectra(num_samples: u64) -> PacketSize {
    let fixed_bits = 8  // SSID
        + 32            // SCET coarse time
        + 16            // SCET fine time
        + 16            // integration time
        + 1             // spare
        + 1 + 3 + 3     // compression schema, spectra (S, K, M)
        + 1             // spare
        + 1 + 3 + 3     // compression schema, triggers (S, K, M)
        + 4             // spare
        + 12            // pixel mask
        + 16;           // number of data samples

    let variable_bits = num_samples
        * (8            // detector index
            + 32 * 8    // spectrum, 32 channels
            + 8         // trigger
            + 8);       // number of integrations

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of a QL flare flag and location packet.
pub fn flare_flag_location(num_samples: u64) -> PacketSize {
    let fixed_bits = 8  // SSID
        + 32            // SCET coarse time
        + 16            // SCET fine time
        + 16            // integration time
        + 16;           // number of data samples

    let variable_bits = num_samples
        * (8            // flare flag
            + 8         // flare location Z (arcmin)
            + 8);       // flare location Y (arcmin)

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of a QL TM management status and flare list packet.
///
/// The repeated record is one flare entry.
pub fn flarelist_tm_mgmt(num_flares: u64) -> PacketSize {
    let fixed_bits = 8  // SSID
        + 32            // UBSD counter
        + 32            // PALD counter
        + 16;           // number of flares

    let variable_bits = num_flares
        * (32           // start time
            + 32        // end time
            + 8         // highest flare flag
            + 32        // TM byte volume
            + 8         // average Z location
            + 8         // average Y location
            + 8);       // processing status

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of a QL energy calibration spectra packet.
///
/// The fixed header describes up to eight sub-spectra; each sample is
/// one (detector, pixel, sub-spectrum) accumulation.
pub fn calibration_spectra(num_energies: u64, num_samples: u64) -> PacketSize {
    let fixed_bits = 8  // SSID
        + 32            // SCET coarse time
        + 32            // duration
        + 16            // quiet time
        + 16            // live time
        + 16            // average temperature
        + 1             // spare
        + 1 + 3 + 3     // compression schema, accumulators (S, K, M)
        + 32            // detector mask
        + 4             // spare
        + 12            // pixel mask
        + 8             // sub-spectrum mask
        + 2             // spare
        + 8 * (2        // spare
            + 10        // number of spectral points
            + 10        // number of summed channels per spectral point
            + 10)       // lowest channel in sub-spectrum
        + 16;           // number of structures in packet

    let variable_bits = num_samples
        * (4            // spare
            + 5         // detector ID
            + 4         // pixel ID
            + 3         // sub-spectrum ID
            + 16        // number of compressed spectral points
            + num_energies * 8); // compressed spectral points

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}
