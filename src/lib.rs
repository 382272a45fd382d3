//! Shift scheduling and status engine for the IPS Virtual clinic.
//!
//! This crate computes shift durations from wall-clock times (including
//! overnight spans), classifies shifts as upcoming, active or finished
//! against an injected instant, and aggregates hours per reporting period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
