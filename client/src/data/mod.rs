//! Static content tables rendered by the section components.
//!
//! DESIGN
//! ======
//! Content lives in `const` tables of `&'static` data so sections borrow it
//! directly with no parsing or allocation at render time. Query helpers sit
//! next to the table they read.

pub mod architectures;
pub mod education;
pub mod experience;
pub mod personal;
pub mod projects;
pub mod skills;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
