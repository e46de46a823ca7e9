//! Core library for vibestudio
//!
//! This crate implements the **Functional Core** of the vibestudio backend,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`vibestudio_core`** (this crate): Pure transformation functions with zero I/O
//! - **`vibestudio`**: HTTP server, model client and filesystem writes (the Imperative Shell)
//!
//! Everything in this crate is deterministic and tested with fixture data; no
//! mock servers or temporary directories are needed here.
//!
//! # Module Organization
//!
//! - [`config`]: Model client settings and their defaults
//! - [`generation`]: Data model, instruction builder and the model reply sanitizer
//! - [`ollama`]: Wire types for Ollama's `/api/generate` endpoint
//! - [`workspace`]: Lexical path resolution and root containment for writes
//!
//! # Example Usage
//!
//! ```rust
//! use vibestudio_core::generation::parse_generation;
//!
//! let reply = "```json\n{\"files\":[{\"path\":\"src/a.txt\",\"content\":\"hi\"}]}\n```";
//! let result = parse_generation(reply).unwrap();
//!
//! assert_eq!(result.files[0].path, "src/a.txt");
//! assert!(result.meta.is_empty());
//! ```

pub mod config;
pub mod generation;
pub mod ollama;
pub mod workspace;
