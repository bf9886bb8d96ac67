//! Project and cut plan validation.

mod validate;

pub use validate::*;
