//! `pco-tools` - batch scripts for `Planning Center` People data.
//!
//! Each script authenticates, pages through a collection, transforms records
//! and writes them back one at a time. The CSV importer reshapes a membership
//! export into a People import file.

pub mod config;
pub mod confirm;
pub mod constants;
pub mod error;
pub mod import;
pub mod jobs;
pub mod logging;
pub mod planning_center;
pub mod transform;
