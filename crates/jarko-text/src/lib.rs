//! Text normalization utilities.
//!
//! This crate provides small, pure functions for cleaning up free text and a
//! configurable pipeline that combines them.
//!
//! # Features
//!
//! - **Accent stripping**: NFD decomposition, nonspacing marks removed, plus a
//!   table for letters that do not decompose (`Ø`, `ł`, `ß`, ...)
//! - **Character substitution**: typographic quotes, dashes, special spaces and
//!   symbols mapped to ASCII, with caller overrides
//! - **Case conversion**: full Unicode upper/lower case
//! - **Whitespace cleanup**: collapsed runs, tight punctuation spacing
//! - **Pipeline**: all of the above in a fixed order, each step optional
//! - **DataFrame helper**: normalize whole Polars columns
//!
//! # Example
//!
//! ```
//! use jarko_text::{NormalizationOptions, normalize, strip_accents};
//!
//! assert_eq!(strip_accents("José María").unwrap(), "Jose Maria");
//!
//! let options = NormalizationOptions::default();
//! assert_eq!(normalize("  Precio:  25€ ", &options).unwrap(), "precio: 25eur");
//! ```

mod accents;
mod case;
mod error;
mod frame;
mod input;
mod observer;
mod options;
mod pipeline;
mod substitution;
mod whitespace;

// === Error Types ===
pub use error::{Result, TextError};

// === Input ===
pub use input::TextInput;

// === Transforms ===
pub use accents::{DIACRITIC_EXCEPTIONS, strip_accents};
pub use case::{to_lower, to_upper};
pub use substitution::{DEFAULT_SUBSTITUTIONS, SubstitutionTable, substitute_characters};
pub use whitespace::clean_whitespace;

// === Pipeline ===
pub use observer::{FailureObserver, FailureRecord, PREVIEW_CHARS, TracingObserver, preview};
pub use options::NormalizationOptions;
pub use pipeline::{Normalizer, normalize};

// === DataFrames ===
pub use frame::{normalize_column, normalize_columns};
