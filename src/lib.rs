//! Core library functions for the graph community lab

pub mod analysis;
pub mod centrality;
pub mod community;
pub mod config;
pub mod error;
pub mod graph;
pub mod storage;
pub mod theory;
pub mod viz;

pub use error::{LabError, Result};
