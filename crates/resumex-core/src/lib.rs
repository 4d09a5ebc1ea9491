//! Core library for resume contact extraction.
//!
//! This crate provides:
//! - Text normalization into the line-preserving and flattened forms
//! - Heuristic extraction of name, email and phone fields
//! - The intake contract with the upstream document decoder
//! - Profile and configuration models

pub mod document;
pub mod error;
pub mod models;
pub mod resume;

pub use document::{DecodeOutcome, DecodedDocument, SourceFormat};
pub use error::{DocumentError, Result};
pub use models::config::ResumexConfig;
pub use models::profile::{CandidateProfile, ProfileField};
pub use resume::{normalize, HeuristicResumeParser, NormalizedText, ResumeParser};
