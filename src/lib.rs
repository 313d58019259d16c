//! Common functionality for meritcurve.
#![warn(missing_docs)]
pub mod cli;
pub mod curve;
pub mod demand;
pub mod exclusion;
pub mod input;
pub mod intersection;
pub mod layout;
pub mod log;
pub mod output;
pub mod pipeline;
pub mod platform;
pub mod settings;
pub mod supply;
pub mod unit;
pub mod units;
pub mod year;

#[cfg(test)]
mod fixture;
