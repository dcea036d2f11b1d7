//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `theme` owns the persisted light/dark
//! preference, `ui` holds transient chrome state.

pub mod theme;
pub mod ui;
