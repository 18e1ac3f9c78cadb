//! Command-line front end for the weft display map.

pub mod cli;
pub mod config;
pub mod render;
