//! Core business logic for the Crepería cost console.
//!
//! This crate contains pure calculation logic with ZERO file, network or
//! terminal dependencies. All costing types, normalization rules and
//! formulas live here.
//!
//! # Modules
//!
//! - `costing` - Standard cost variance engine and report formatting

pub mod costing;
