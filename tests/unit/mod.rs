//! Unit tests for the library modules.

mod targets;

#[cfg(feature = "serde")]
mod resource;
