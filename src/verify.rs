//! Verification of the computed sum against its expected value

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::VerifyConfig;
use crate::error::{Result, SquaresError};
use crate::squares::{closed_form, sum_of_squares, sum_squares_of_first_10_integers, FIRST_TEN};

pub const SUCCESS_MESSAGE: &str = "Test passed!";

/// Outcome of a successful verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub upper_bound: u64,
    pub expected: u64,
    pub actual: u64,
}

impl VerificationReport {
    /// Console output: the computed value, then the success confirmation.
    pub fn lines(&self) -> [String; 2] {
        [
            format!(
                "The sum of squares of the first {} integers is: {}",
                self.upper_bound, self.actual
            ),
            SUCCESS_MESSAGE.to_string(),
        ]
    }
}

/// Compute the sum for the configured bound and check it against the
/// expected value.
pub fn verify(config: &VerifyConfig) -> Result<VerificationReport> {
    config.validate()?;

    let upper_bound = config.upper_bound;
    let actual = if upper_bound == FIRST_TEN {
        sum_squares_of_first_10_integers()
    } else {
        sum_of_squares(upper_bound)?
    };

    let expected = match config.expected {
        Some(expected) => expected,
        None => closed_form(upper_bound)?,
    };
    debug!(
        "Verifying upper bound {}: expected {}, actual {}",
        upper_bound, expected, actual
    );

    if actual != expected {
        return Err(SquaresError::Mismatch { expected, actual });
    }

    info!("Sum of squares verified for upper bound {}", upper_bound);
    Ok(VerificationReport {
        upper_bound,
        expected,
        actual,
    })
}
