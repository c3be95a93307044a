//! Command-line interface: interactive play, headless training and table
//! inspection.

pub mod commands;
pub mod logging;
pub mod output;
