//! # Embedview Core
//!
//! Platform-independent library behind the embedview document explorer.
//!
//! A document goes through this crate in a straight line: extracted text is
//! split into overlapping fixed-size windows, each window is embedded by a
//! pluggable [`embedding::Embedder`], and the resulting
//! [`embedding::EmbeddedChunk`] collection is ranked, filtered, and
//! highlighted against live search input for display.
//!
//! ## Modules
//!
//! - [`chunking`] - Fixed-stride overlapping window chunker
//! - [`search`] - Search tokenization, chunk ranking, and match highlighting
//! - [`display`] - Visible-count controller for the chunk explorer
//! - [`extract`] - Text extraction from uploaded documents (PDF, DOCX, text)
//! - [`embedding`] - Embedder trait and embedded-chunk data contract
//! - [`processing`] - Sequential chunk-and-embed pipeline with progress
//! - [`config`] - Shared configuration constants
//! - [`error`] - Error types for extraction, chunking, and embedding

#![forbid(unsafe_code)]

pub mod chunking;
pub mod config;
pub mod display;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod processing;
pub mod search;
