//! Requirement extraction: segment geometry to cut requests.

mod components;

pub use components::*;
