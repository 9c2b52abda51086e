//! Sum-of-squares computations
//!
//! The fixed exercise (`sum_squares_of_first_10_integers`) plus a general,
//! overflow-checked version for arbitrary upper bounds and its closed form.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, SquaresError};

/// Upper bound of the fixed exercise
pub const FIRST_TEN: u64 = 10;

/// 1² + 2² + ... + 10²
pub const FIRST_TEN_SUM: u64 = 385;

/// Largest upper bound whose sum of squares still fits in a `u64`
pub const MAX_UPPER_BOUND: u64 = 3_810_777;

/// How a sum of squares is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Accumulate i² one term at a time
    Iterative,
    /// Evaluate n(n+1)(2n+1)/6 directly
    ClosedForm,
}

/// Result of a single computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computation {
    pub upper_bound: u64,
    pub method: Method,
    pub sum: u64,
}

/// Sum of the squares of 1 through 10.
pub fn sum_squares_of_first_10_integers() -> u64 {
    let mut total = 0;
    for i in 1..=FIRST_TEN {
        total += i * i;
    }
    total
}

/// Sum of i² for i in `1..=upper_bound`, failing if the total leaves `u64`.
pub fn sum_of_squares(upper_bound: u64) -> Result<u64> {
    let mut total: u64 = 0;
    for i in 1..=upper_bound {
        total = i
            .checked_mul(i)
            .and_then(|square| total.checked_add(square))
            .ok_or(SquaresError::Overflow { upper_bound })?;
    }
    trace!("Iterative sum of squares for {}: {}", upper_bound, total);
    Ok(total)
}

/// n(n+1)(2n+1)/6, evaluated in 128-bit intermediates.
pub fn closed_form(upper_bound: u64) -> Result<u64> {
    let overflow = || SquaresError::Overflow { upper_bound };
    let n = u128::from(upper_bound);

    let product = n
        .checked_mul(n + 1)
        .and_then(|p| p.checked_mul(2 * n + 1))
        .ok_or_else(overflow)?;

    u64::try_from(product / 6).map_err(|_| overflow())
}

/// Compute the sum of squares up to `upper_bound` with the given method.
pub fn compute(upper_bound: u64, method: Method) -> Result<Computation> {
    debug!("Computing sum of squares up to {} ({:?})", upper_bound, method);

    let sum = match method {
        Method::Iterative => sum_of_squares(upper_bound)?,
        Method::ClosedForm => closed_form(upper_bound)?,
    };

    Ok(Computation {
        upper_bound,
        method,
        sum,
    })
}
