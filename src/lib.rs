//! resource-impact library — resource dependency graph construction and impact analysis.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod server;
