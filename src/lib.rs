//! Mixed layer lake metabolism
//!
//! Simulates dissolved oxygen and phytoplankton biomass of a lake's surface mixed layer from
//! high-frequency water temperature and PAR records, for comparison with observed DO.

pub mod config;
pub mod date_gen;
pub mod forcing;
pub mod metabolism;
pub mod readers;
pub mod report;
pub mod runner;
pub mod utils;
