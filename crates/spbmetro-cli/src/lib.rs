//! SpbMetro CLI library.
//!
//! This crate provides command-line interface utilities for the SpbMetro
//! route planner, including terminal styling and output formatting.

pub mod commands;
pub mod output;
pub mod terminal;
