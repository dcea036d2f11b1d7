//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; `home` stitches the section
//! components together and leaves rendering details to `components`.

pub mod home;
