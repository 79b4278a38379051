//! Embedview - a local document chunk and embedding explorer.
//!
//! Upload a document and watch it become data: the file's text is split
//! into overlapping windows, each window is embedded with a MiniLM
//! sentence-transformer, and the resulting chunks can be searched, ranked,
//! and inspected with their raw vectors. Everything runs on-device; no
//! document content leaves the machine.
//!
//! The pipeline itself (extraction, chunking, search, ranking) lives in
//! the `embedview-core` crate. This crate supplies the Dioxus UI and the
//! fastembed-backed embedder.

#![forbid(unsafe_code)]

pub mod components;
pub mod embedding;
pub mod utils;
