//! Placeholder substitution
//!
//! This module takes template text and a parameter value and produces the
//! rendered string.

pub mod config;
pub mod substitute;

pub use config::{RenderConfig, UnknownPolicy, DEFAULT_PLACEHOLDER};
pub use substitute::{render, render_with_config};
