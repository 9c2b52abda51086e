//! # sumsq
//!
//! Computes the sum of squares of the first ten positive integers and verifies
//! it against the expected value, 385.
//!
//! ## Usage
//!
//! ```bash
//! sumsq [verify [--config path] [--json]] [compute [-n N] [--method closed-form]]
//! ```
//!
//! ## Modules
//!
//! - `squares` - The fixed exercise plus overflow-checked general sums
//! - `verify` - Checks a computed sum against its expected value
//! - `config` - Optional TOML settings for a verification run
//! - `error` - Error type shared across the crate
pub mod config;
pub mod error;
pub mod squares;
pub mod verify;

pub use error::{Result, SquaresError};
pub use squares::sum_squares_of_first_10_integers;
