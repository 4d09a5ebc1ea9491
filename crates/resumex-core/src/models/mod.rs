//! Data models for profiles and configuration.

pub mod config;
pub mod profile;
