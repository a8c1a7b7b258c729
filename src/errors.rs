/*!
This module contains error types specific to freqorder as well as a result alias to enable error
propagation.
*/

use std::fmt;

/// Alias for a [`Result`] that wraps [`FreqOrderError`].
pub type FreqOrderResult<T> = Result<T, FreqOrderError>;

/// Top-level crate errors.
#[derive(Debug)]
pub enum FreqOrderError {
    /**
    Variant for a frequency sum that does not fit in the frequency field.

    Joining two nodes adds their frequencies and a wrapped sum would silently misorder the
    parent relative to its children, so the overflow is surfaced instead.
    */
    FrequencyOverflow(String),
}

impl std::error::Error for FreqOrderError {}

impl fmt::Display for FreqOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreqOrderError::FrequencyOverflow(base_err) => write!(f, "{}", base_err),
        }
    }
}
