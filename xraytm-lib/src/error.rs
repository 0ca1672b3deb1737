use thiserror::Error;

/// The primary error type for the `xraytm-lib` library.
///
/// Every variant is a caller-input error: the model is pure arithmetic,
/// so nothing here is transient or worth retrying.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TmError {
    #[error("integration time of {integration_s} s does not divide the 86400 s day into a whole number of records")]
    NonDivisibleCadence { integration_s: f64 },

    #[error("record of {record_bits} bits cannot be packed into the {record_space_bits} bits left for data")]
    DegenerateRecordSize { record_bits: u64, record_space_bits: u64 },

    #[error("fixed header of {fixed_bits} bits leaves no record space in a {capacity_bits} bit payload")]
    FixedOverheadTooLarge { fixed_bits: u64, capacity_bits: u64 },
}
