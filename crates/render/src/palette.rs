use crate::surface::LinearGradient;
use gallery_catalog::BiomeType;
use gallery_common::{Color, Size};

/// Background gradient stops (top, bottom) per biome.
pub const PALETTE: [(BiomeType, Color, Color); 6] = [
    (BiomeType::Mountain, Color::hex(0x1a1a2e), Color::hex(0x4a4e69)),
    (BiomeType::Forest, Color::hex(0x0f2027), Color::hex(0x2c5364)),
    (BiomeType::Ocean, Color::hex(0x000428), Color::hex(0x004e92)),
    (BiomeType::Desert, Color::hex(0xcb2d3e), Color::hex(0xef473a)),
    (BiomeType::Sky, Color::hex(0x84fab0), Color::hex(0x8fd3f4)),
    (BiomeType::Volcanic, Color::hex(0x2c0703), Color::hex(0xc31432)),
];

/// Top and bottom colors for `biome`, or `None` for an unrecognized biome.
pub fn gradient_stops(biome: BiomeType) -> Option<(Color, Color)> {
    PALETTE
        .iter()
        .find(|(b, _, _)| *b == biome)
        .map(|&(_, top, bottom)| (top, bottom))
}

/// Top-to-bottom background gradient covering `size`.
pub fn background(biome: BiomeType, size: Size) -> Option<LinearGradient> {
    let (top, bottom) = gradient_stops(biome)?;
    Some(
        LinearGradient::vertical(size)
            .with_stop(0.0, top)
            .with_stop(1.0, bottom),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_common::DVec2;

    #[test]
    fn every_known_biome_has_a_palette() {
        for biome in BiomeType::KNOWN {
            assert!(gradient_stops(biome).is_some(), "{biome} has no palette");
        }
    }

    #[test]
    fn unrecognized_has_no_palette() {
        assert!(gradient_stops(BiomeType::Unrecognized).is_none());
        assert!(background(BiomeType::Unrecognized, Size::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn ocean_colors() {
        let (top, bottom) = gradient_stops(BiomeType::Ocean).unwrap();
        assert_eq!(top.to_string(), "#000428");
        assert_eq!(bottom.to_string(), "#004e92");
    }

    #[test]
    fn background_runs_top_to_bottom() {
        let size = Size::new(300.0, 200.0);
        let g = background(BiomeType::Desert, size).unwrap();
        assert_eq!(g.color_at(DVec2::new(150.0, 0.0)), Some(Color::hex(0xcb2d3e)));
        assert_eq!(g.color_at(DVec2::new(0.0, 200.0)), Some(Color::hex(0xef473a)));
    }
}
