//! Shared primitives, traits, and utilities for the Cyanea ecosystem.
//!
//! `cyanea-core` provides the foundation the ring perception crates build on:
//!
//! - **Error types** — [`CyaneaError`] and [`Result`] for structured error handling
//! - **Traits** — [`AdjacencyList`] for the vertex-indexed graph view searches
//!   walk, [`Annotated`] and [`Summarizable`] for named, printable domain types
//! - **Bit sets** — [`VertexSet`] with a single-word and an arbitrary-width
//!   representation for dense vertex sets

pub mod bitset;
pub mod error;
pub mod traits;

pub use bitset::{VertexSet, WideSet, WordSet, WORD_BITS};
pub use error::{CyaneaError, Result};
pub use traits::*;
