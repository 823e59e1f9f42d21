//! cms-core/src/lib.rs
//!
//! The central domain logic and interface definitions for the CMS seeder:
//! page/section models, the section schema registry, deterministic demo-page
//! assembly, and the idempotent apply operation driven through the store ports.

pub mod assembly;
pub mod assets;
pub mod error;
pub mod models;
pub mod registry;
pub mod seeder;
pub mod traits;

// Re-exporting for easier access in the adapter crates and binaries
pub use assembly::*;
pub use error::*;
pub use models::*;
pub use seeder::*;
pub use traits::*;
