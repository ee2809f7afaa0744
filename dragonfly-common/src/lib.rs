//! Common utilities for the dragonfly routing toolkit

pub mod error;

pub use error::{Error, Result};
