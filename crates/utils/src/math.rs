//! Numeric helpers.

use thiserror::Error;

/// Errors from numeric helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("window must be greater than 0")]
    InvalidWindow,
}

/// Trailing simple moving average over `values`.
///
/// The result has `values.len() - window + 1` entries, or none when the
/// window is longer than the input.
///
/// # Errors
///
/// Returns `MathError::InvalidWindow` when `window` is 0.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>, MathError> {
    if window == 0 {
        return Err(MathError::InvalidWindow);
    }
    if window > values.len() {
        return Ok(Vec::new());
    }

    let divisor = window as f64;
    let mut sum: f64 = values[..window].iter().sum();
    let mut averages = Vec::with_capacity(values.len() - window + 1);
    averages.push(sum / divisor);

    for (incoming, outgoing) in values[window..].iter().zip(values) {
        sum += incoming - outgoing;
        averages.push(sum / divisor);
    }

    Ok(averages)
}
