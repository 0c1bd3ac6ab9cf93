//! Known dimensions and their per-dimension defaults

use crate::core::types::Color;

/// Display and default styling for a dimension tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub default_icon: &'static str,
    pub default_color: Color,
}

pub const OVERWORLD: &str = "minecraft:overworld";
pub const THE_NETHER: &str = "minecraft:the_nether";
pub const THE_END: &str = "minecraft:the_end";

/// Fixed table of known dimensions. The first entry is the fallback for
/// unrecognized tags.
pub const DIMENSIONS: [DimensionInfo; 3] = [
    DimensionInfo {
        id: OVERWORLD,
        display_name: "Overworld",
        default_icon: "grass_block.png",
        default_color: Color::new(0x4CAF50),
    },
    DimensionInfo {
        id: THE_NETHER,
        display_name: "Nether",
        default_icon: "netherrack.png",
        default_color: Color::new(0xF44336),
    },
    DimensionInfo {
        id: THE_END,
        display_name: "End",
        default_icon: "end_stone.png",
        default_color: Color::new(0x9C27B0),
    },
];

impl DimensionInfo {
    /// Look up a dimension by tag, falling back to the first table entry
    pub fn lookup(id: &str) -> &'static DimensionInfo {
        DIMENSIONS.iter().find(|d| d.id == id).unwrap_or(&DIMENSIONS[0])
    }

    /// Look up a dimension by display name, falling back to the first table entry
    pub fn lookup_display_name(name: &str) -> &'static DimensionInfo {
        DIMENSIONS.iter().find(|d| d.display_name == name).unwrap_or(&DIMENSIONS[0])
    }

    /// Whether the tag is one of the known dimensions
    pub fn is_known(id: &str) -> bool {
        DIMENSIONS.iter().any(|d| d.id == id)
    }
}
