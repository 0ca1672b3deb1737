//! Bulk science data packet layouts.
//!
//! X-ray science data is downlinked at four compression levels (level 0
//! raw counts, levels 1/2 octet-compressed counts, level 3 visibilities)
//! alongside the spectrogram and aspect streams. All field widths follow
//! the instrument TM/TC interface control document.

use crate::product::PacketSize;

/// Size of a level 0 (uncompressed) x-ray science packet.
///
/// The repeated record is one (pixel, detector, energy) count sample.
pub fn xray_level0(num_samples: u64) -> PacketSize {
    let fixed_bits = 16 // starting time
        + 8             // RCR
        + 16            // integration time
        + 4             // spare
        + 12            // pixel mask
        + 32            // detector mask
        + 15 * 8        // trigger accumulators
        + 16;           // number of samples M

    let variable_bits = num_samples
        * (4            // pixel ID
            + 5         // detector index
            + 5         // energy ID
            + 2         // continuation bits
            + 2 * 8);   // worst case 2 bytes for counts

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of a level 1 (compressed counts) x-ray science packet.
///
/// The repeated record is one energy group carrying one compressed count
/// octet per (pixel set, detector mask) combination.
pub fn xray_level1(num_pixel_sets: u64, num_energy_groups: u64, num_detector_masks: u64) -> PacketSize {
    let fixed_bits = 16 // starting time
        + 8             // RCR
        + 8             // number of pixel sets P
        + num_pixel_sets * (4 + 12) // spare + pixel mask, per set
        + 32            // detector masks
        + 16            // integration time
        + 15 * 8        // trigger accumulators
        + 8;            // number of energies

    let variable_bits = num_energy_groups
        * (3            // spare
            + 5         // E1 low bound
            + 3         // spare
            + 5         // E2 high bound
            + 16        // number of data elements
            + num_pixel_sets * num_detector_masks * 8); // compressed counts

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of a level 2 x-ray science packet.
///
/// Level 2 shares the level 1 wire structure; only the onboard count
/// processing differs, which sizing does not see.
pub fn xray_level2(num_pixel_sets: u64, num_energy_groups: u64, num_detector_masks: u64) -> PacketSize {
    xray_level1(num_pixel_sets, num_energy_groups, num_detector_masks)
}

/// Size of a level 3 (visibilities) x-ray science packet.
///
/// The repeated record is one energy group carrying a complex visibility
/// per detector.
pub fn xray_level3(num_energy_groups: u64, num_detectors: u64) -> PacketSize {
    let fixed_bits = 16 // starting time
        + 8             // RCR
        + 8             // duration
        + 5 * (4 + 12)  // spare + pixel mask, sets 1 to 5
        + 32            // detector mask
        + 15 * 8        // trigger accumulators
        + 8;            // number of energy groups

    let variable_bits = num_energy_groups
        * (3            // spare
            + 5         // E1 low bound
            + 3         // spare
            + 5         // E2 high bound
            + 8         // flux
            + 8         // number of detectors N
            + num_detectors * (8 + 8 + 8)); // detector ID + real + imaginary visibility

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of a spectrogram packet.
pub fn spectrogram(num_samples: u64, num_energies: u64) -> PacketSize {
    let fixed_bits = 4  // spare
        + 12            // pixel mask
        + 32            // detector mask
        + 8             // RCR
        + 1             // spare
        + 5             // E min
        + 5             // E max
        + 5             // E unit
        + 16            // number of samples N
        + 16;           // closing time offset

    let variable_bits = num_samples
        * (16           // delta time
            + 8         // compressed combined trigger count
            + 8         // number of energies M
            + num_energies * 8); // compressed count per energy

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}

/// Size of an aspect data packet.
///
/// Each sample reads both photodiodes of both channels.
pub fn aspect(num_samples: u64) -> PacketSize {
    let fixed_bits = 8  // SSID
        + 32            // SCET coarse time
        + 16            // SCET fine time
        + 8             // summing value
        + 16;           // number of samples N

    let variable_bits = num_samples
        * (16           // ChA diode 0 voltage
            + 16        // ChA diode 1 voltage
            + 16        // ChB diode 0 voltage
            + 16);      // ChB diode 1 voltage

    PacketSize {
        fixed_bits,
        variable_bits,
    }
}
