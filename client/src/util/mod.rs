//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser access (`theme_storage`) and the pure layout, text, and animation
//! logic the section components call into.

pub mod diagram;
pub mod text;
pub mod theme_storage;
pub mod typing;
