//! `town-world` — the static furniture catalog the residents live in.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`utility`]   | `Utility` (what an object is for)                         |
//! | [`object`]    | `Rect`, `WorldObject`, `Room`                             |
//! | [`catalog`]   | `ObjectCatalog` (utility index + R-tree), `CatalogBuilder`|
//! | [`content`]   | `default_town()`, the shipped map                         |
//! | [`loader`]    | `load_catalog_csv`, `load_catalog_reader`                 |
//! | [`error`]     | `WorldError`, `WorldResult<T>`                            |
//!
//! Objects never move and are never added after the catalog is built, so
//! `ObjectId` is simply the position in the catalog.  The only per-object
//! state that changes at run time (who is using it) lives on the agents,
//! not here.

pub mod catalog;
pub mod content;
pub mod error;
pub mod loader;
pub mod object;
pub mod utility;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogBuilder, ObjectCatalog};
pub use content::default_town;
pub use error::{WorldError, WorldResult};
pub use loader::{load_catalog_csv, load_catalog_reader};
pub use object::{Rect, Room, WorldObject};
pub use utility::Utility;
