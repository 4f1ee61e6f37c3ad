use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Small integer identifying a world in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WorldId(pub u32);

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Biome category of a world. Selects the background palette and the
/// decoration drawn over the particle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BiomeType {
    Mountain,
    Forest,
    Ocean,
    Desert,
    Sky,
    Volcanic,
    /// Any name outside the known set. Renders as particles on a cleared
    /// surface: no palette, no decoration.
    Unrecognized,
}

impl BiomeType {
    /// The six known biomes, in catalog order.
    pub const KNOWN: [BiomeType; 6] = [
        BiomeType::Mountain,
        BiomeType::Forest,
        BiomeType::Ocean,
        BiomeType::Desert,
        BiomeType::Sky,
        BiomeType::Volcanic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BiomeType::Mountain => "Mountain",
            BiomeType::Forest => "Forest",
            BiomeType::Ocean => "Ocean",
            BiomeType::Desert => "Desert",
            BiomeType::Sky => "Sky",
            BiomeType::Volcanic => "Volcanic",
            BiomeType::Unrecognized => "Unrecognized",
        }
    }

    /// Parse a biome name, case-insensitively. Unknown names map to
    /// [`BiomeType::Unrecognized`].
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        Self::KNOWN
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
            .unwrap_or(BiomeType::Unrecognized)
    }

    pub fn is_known(self) -> bool {
        self != BiomeType::Unrecognized
    }
}

impl FromStr for BiomeType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for BiomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One world in the gallery. Statically defined, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorldRecord {
    pub id: WorldId,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub biome: BiomeType,
    pub inhabitants: u64,
    /// Display-only label; not used by rendering.
    pub terrain: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        for biome in BiomeType::KNOWN {
            assert_eq!(BiomeType::parse(biome.name()), biome);
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(BiomeType::parse(" ocean "), BiomeType::Ocean);
        assert_eq!(BiomeType::parse("VOLCANIC"), BiomeType::Volcanic);
    }

    #[test]
    fn unknown_name_degrades() {
        let b: BiomeType = "Tundra".parse().unwrap();
        assert_eq!(b, BiomeType::Unrecognized);
        assert!(!b.is_known());
    }

    #[test]
    fn unrecognized_is_not_in_known_set() {
        assert!(!BiomeType::KNOWN.contains(&BiomeType::Unrecognized));
    }

    #[test]
    fn world_id_display() {
        assert_eq!(WorldId(3).to_string(), "3");
    }
}
