// Packet envelope constants for the telemetry budget model

/// Size of the packet primary header (6 bytes)
pub const PACKET_HEADER_BITS: u64 = 6 * 8;

/// Size of the packet data-field header (10 bytes)
pub const DATA_FIELD_HEADER_BITS: u64 = 10 * 8;

/// Maximum packet data-field payload (4096 bytes)
pub const MAX_PAYLOAD_BITS: u64 = 4096 * 8;

/// Observation window the downlink budget is projected over
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
