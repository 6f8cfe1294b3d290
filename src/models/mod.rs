//! Core data models for the gazetteer.

pub mod place;

pub use place::{Place, RawPlace};
