//! This crate contains shared helpers used across the other crates in this workspace.

pub mod yaml;
