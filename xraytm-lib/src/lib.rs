pub mod bulk;
pub mod constants;
pub mod error;
pub mod product;
pub mod quicklook;
pub mod rate;

// Re-export the main types for easy access
pub use error::TmError;
pub use product::{PacketSize, Product, Ssid};
pub use rate::{RateEstimate, daily_rate, daily_rate_for_size};
