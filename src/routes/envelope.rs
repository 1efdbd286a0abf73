use serde::{Deserialize, Serialize};

// =========================================================
// Surplus/deficit envelope types
// =========================================================

/// Elementwise max/min envelope over two aligned series.
///
/// `upper` bounds the region rendered as surplus (supply side above demand
/// side), `lower` bounds the deficit overlap region. Both series share the
/// index axis of the rows they were derived from (blood group order for the
/// daily chart, date order for the projection chart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// `upper[i] = max(a[i], b[i])`
    pub upper: Vec<f64>,
    /// `lower[i] = min(a[i], b[i])`
    pub lower: Vec<f64>,
}
