//! # Hemocast Backend
//!
//! Forecast-aggregation backend for a blood inventory dashboard.
//!
//! This crate combines pre-trained per-blood-group time-series models into
//! the datasets the dashboard frontend renders: a daily inventory snapshot
//! across all blood groups, a multi-week supply-vs-demand projection for a
//! selected group, and the surplus/deficit envelope that shades both charts.
//! The models themselves are trained elsewhere and loaded once at startup as
//! read-only artifacts; the backend exposes the aggregated data as a REST
//! API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Forecaster trait, fitted model implementation, collections
//! - [`store`]: Model artifact loading, integrity checks, process-wide access
//! - [`services`]: Aggregation logic (snapshot, projection, envelope)
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! All per-request computation is pure and operates on an immutable
//! [`models::ModelSet`] shared across request handlers, so requests may run
//! fully in parallel.

pub mod api;

pub mod models;
pub mod store;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
