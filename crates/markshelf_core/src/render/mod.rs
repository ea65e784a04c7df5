//! Markdown-to-HTML rendering.
//!
//! # Responsibility
//! - Expose the pure markdown conversion entry point used for note bodies.
//! - Keep all rewrite rules and their ordering inside this module.

pub mod markdown;
