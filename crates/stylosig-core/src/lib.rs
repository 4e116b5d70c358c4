//! Core library for stylosig.
//!
//! Computes stylometric signatures of free text and ranks candidate texts by
//! how closely they match a reference signature.
//!
//! # Modules
//!
//! - [`text`] - Sentence, clause and word splitting
//! - [`frequency`] - Case-insensitive word frequency counts
//! - [`signature`] - The six-component [`Signature`] and its computation
//! - [`compare`] - Distance between signatures
//! - [`rank`] - Nearest-match ranking over a corpus
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use stylosig_core::{compute_signature, rank};
//!
//! let reference = compute_signature("A short bland text.");
//! let texts = [
//!     "A short bland text.",
//!     "A verbose text with many many distinct long words indeed.",
//! ];
//! assert_eq!(rank(&texts, &reference).unwrap(), 1);
//! ```
#![deny(unsafe_code)]

pub mod compare;
pub mod config;
pub mod error;
pub mod frequency;
pub mod rank;
pub mod signature;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use rank::{CandidateScore, RankReport, rank, score_corpus};
pub use signature::{Signature, SignatureReport, analyze_signature, compute_signature};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
