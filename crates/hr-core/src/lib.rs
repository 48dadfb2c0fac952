//! hr-core: shared foundation for heatrate.
//!
//! Contains:
//! - sample (timestamped readings + series order checks)
//! - numeric (Real + finiteness check + rounding helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod sample;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use sample::*;
