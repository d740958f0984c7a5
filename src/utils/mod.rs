//! Utility modules: data-directory persistence and log setup.

pub mod logging;
pub mod persistence;
