//! Surplus/deficit envelope derivation.

use crate::api::Envelope;
use crate::services::ServiceError;

/// Elementwise max/min over two aligned series.
///
/// The inputs must be equal length; a mismatch is a caller error and is
/// reported immediately rather than truncated or padded. For every index,
/// `{upper[i], lower[i]}` is exactly the sorted pair of the two inputs.
pub fn derive_envelope(series_a: &[f64], series_b: &[f64]) -> Result<Envelope, ServiceError> {
    if series_a.len() != series_b.len() {
        return Err(ServiceError::LengthMismatch {
            left: series_a.len(),
            right: series_b.len(),
        });
    }

    let upper = series_a
        .iter()
        .zip(series_b)
        .map(|(&a, &b)| a.max(b))
        .collect();
    let lower = series_a
        .iter()
        .zip(series_b)
        .map(|(&a, &b)| a.min(b))
        .collect();

    Ok(Envelope { upper, lower })
}
