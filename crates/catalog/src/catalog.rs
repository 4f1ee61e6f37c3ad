use crate::record::{BiomeType, WorldId, WorldRecord};

/// Errors from catalog lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no world with id {0} in the catalog")]
    UnknownWorld(WorldId),
}

/// The built-in worlds, in display order.
pub static WORLDS: [WorldRecord; 6] = [
    WorldRecord {
        id: WorldId(1),
        name: "Crystal Peaks",
        icon: "⛰️",
        description: "Majestic mountains made of luminescent crystals that change color with the seasons",
        biome: BiomeType::Mountain,
        inhabitants: 12_000,
        terrain: "Rocky",
    },
    WorldRecord {
        id: WorldId(2),
        name: "Nebula Forest",
        icon: "🌲",
        description: "An enchanted forest where trees glow with ethereal cosmic energy",
        biome: BiomeType::Forest,
        inhabitants: 45_000,
        terrain: "Dense",
    },
    WorldRecord {
        id: WorldId(3),
        name: "Azure Depths",
        icon: "🌊",
        description: "Underwater civilization with bioluminescent coral cities",
        biome: BiomeType::Ocean,
        inhabitants: 78_000,
        terrain: "Aquatic",
    },
    WorldRecord {
        id: WorldId(4),
        name: "Crimson Dunes",
        icon: "🏜️",
        description: "Vast desert with shifting red sands and ancient ruins",
        biome: BiomeType::Desert,
        inhabitants: 8_000,
        terrain: "Sandy",
    },
    WorldRecord {
        id: WorldId(5),
        name: "Sky Citadel",
        icon: "☁️",
        description: "Floating islands suspended in the clouds with gravity-defying architecture",
        biome: BiomeType::Sky,
        inhabitants: 32_000,
        terrain: "Aerial",
    },
    WorldRecord {
        id: WorldId(6),
        name: "Ember Plains",
        icon: "🔥",
        description: "Volcanic grasslands where fire and life coexist in harmony",
        biome: BiomeType::Volcanic,
        inhabitants: 15_000,
        terrain: "Volcanic",
    },
];

/// Read-only view over an ordered list of worlds.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    worlds: &'static [WorldRecord],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog shipped with the gallery.
    pub fn builtin() -> Self {
        Self { worlds: &WORLDS }
    }

    /// Catalog over an arbitrary static list (used by tests and tools).
    pub fn from_static(worlds: &'static [WorldRecord]) -> Self {
        Self { worlds }
    }

    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    /// Iterate worlds in display order.
    pub fn iter(&self) -> std::slice::Iter<'static, WorldRecord> {
        self.worlds.iter()
    }

    pub fn get(&self, id: WorldId) -> Option<&'static WorldRecord> {
        self.worlds.iter().find(|w| w.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: WorldId) -> Result<&'static WorldRecord, CatalogError> {
        self.get(id).ok_or(CatalogError::UnknownWorld(id))
    }

    /// World at a zero-based display position.
    pub fn at(&self, index: usize) -> Option<&'static WorldRecord> {
        self.worlds.get(index)
    }
}
