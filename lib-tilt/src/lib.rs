#![cfg_attr(not(any(test, feature = "csv")), no_std)]

pub mod error;
pub use error::*;

pub mod sample;
pub use sample::*;

pub mod estimate;
pub use estimate::*;

pub mod accel;
pub use accel::*;

pub mod gyro;
pub use gyro::*;

pub mod fuser;
pub use fuser::*;

pub mod session;
pub use session::*;

/// In Hz; the rate the original recording hardware delivers samples at.
///
pub const DEFAULT_SAMPLE_RATE: f32 = 100.0;

/// Complementary filter mixing factor that holds up well at the default
/// sample rate.
///
pub const DEFAULT_ALPHA: f32 = 0.1;
