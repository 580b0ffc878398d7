//! CLI command implementations.

pub mod common;
pub mod demo;
pub mod gates;
pub mod run;
pub mod show;
pub mod version;
