//! World Catalog: the immutable list of worlds shown in the gallery and the
//! single piece of mutable state, the current selection.
//!
//! # Invariants
//! - Records are static and never mutated after startup.
//! - At most one world is selected at a time.
//! - Unknown biome names parse to [`BiomeType::Unrecognized`], never an error.

mod catalog;
mod format;
mod record;
mod selection;

pub use catalog::{Catalog, CatalogError, WORLDS};
pub use format::format_population;
pub use record::{BiomeType, WorldId, WorldRecord};
pub use selection::{Selection, SelectionChange};

pub fn crate_info() -> &'static str {
    "gallery-catalog v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("catalog"));
    }
}
