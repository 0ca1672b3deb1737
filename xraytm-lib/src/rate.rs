//! Packing and downlink-rate projection.
//!
//! Turns one product's size pair into the number of records a physical
//! packet carries and the average packet and bit volume a full day of
//! sampling implies at a given integration cadence.

use crate::constants::{MAX_PAYLOAD_BITS, SECONDS_PER_DAY};
use crate::error::TmError;
use crate::product::{PacketSize, Product};
use serde::Serialize;
use tracing::debug;

/// Packing and rate figures for one product at one cadence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateEstimate {
    /// Maximum packet payload in bits.
    pub capacity_bits: u64,
    /// Per-packet fixed header overhead in bits.
    pub fixed_bits: u64,
    /// Payload space left for records once the fixed header is paid.
    pub record_space_bits: u64,
    /// Size of one repeated record in bits.
    pub record_bits: u64,
    /// Whole records fitting one packet.
    pub records_per_packet: u64,
    /// Unused bits at the end of a full packet.
    pub leftover_bits: u64,
    /// Average packets per day. This is a budgeting rate, not a
    /// dispatchable packet count: a partially filled packet rides into
    /// the next day rather than rounding the figure up.
    pub packets_per_day: f64,
    /// Total bits transmitted over one day at this cadence.
    pub bits_per_day: f64,
}

impl RateEstimate {
    /// Average downlink rate in bits per second.
    pub fn bits_per_second(&self) -> f64 {
        self.bits_per_day / SECONDS_PER_DAY as f64
    }
}

/// Project the daily packet and bit volume for a product sampled once
/// every `integration_s` seconds.
pub fn daily_rate(product: &Product, integration_s: f64) -> Result<RateEstimate, TmError> {
    daily_rate_for_size(product.packet_size(1), integration_s)
}

/// As [`daily_rate`], for an already-computed one-record size pair.
pub fn daily_rate_for_size(size: PacketSize, integration_s: f64) -> Result<RateEstimate, TmError> {
    let records_per_day = SECONDS_PER_DAY as f64 / integration_s;
    if integration_s <= 0.0 || records_per_day.fract() != 0.0 {
        return Err(TmError::NonDivisibleCadence { integration_s });
    }

    let PacketSize {
        fixed_bits,
        variable_bits: record_bits,
    } = size;
    if fixed_bits >= MAX_PAYLOAD_BITS {
        return Err(TmError::FixedOverheadTooLarge {
            fixed_bits,
            capacity_bits: MAX_PAYLOAD_BITS,
        });
    }

    let record_space_bits = MAX_PAYLOAD_BITS - fixed_bits;
    if record_bits == 0 || record_bits > record_space_bits {
        return Err(TmError::DegenerateRecordSize {
            record_bits,
            record_space_bits,
        });
    }

    // Explicit divmod: the leftover is diagnostic output, not waste to
    // hide.
    let records_per_packet = record_space_bits / record_bits;
    let leftover_bits = record_space_bits % record_bits;

    let packets_per_day = records_per_day / records_per_packet as f64;
    let bits_per_day = packets_per_day * (fixed_bits + records_per_packet * record_bits) as f64;

    debug!(
        "packing: fixed {} bits, record {} bits, {} records/packet, {} bits leftover, {:.3} packets/day",
        fixed_bits, record_bits, records_per_packet, leftover_bits, packets_per_day
    );

    Ok(RateEstimate {
        capacity_bits: MAX_PAYLOAD_BITS,
        fixed_bits,
        record_space_bits,
        record_bits,
        records_per_packet,
        leftover_bits,
        packets_per_day,
        bits_per_day,
    })
}
