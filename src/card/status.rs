use crate::gfx::resources::Color;

/// Membership tier shown on the card, each with its accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTier {
    Blue,
    Silver,
    Gold,
    Platinum,
    Obsidian,
}

impl StatusTier {
    pub const ALL: [StatusTier; 5] = [
        StatusTier::Blue,
        StatusTier::Silver,
        StatusTier::Gold,
        StatusTier::Platinum,
        StatusTier::Obsidian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StatusTier::Blue => "Blue Member",
            StatusTier::Silver => "Silver Elite Status",
            StatusTier::Gold => "Gold Elite Status",
            StatusTier::Platinum => "Platinum Elite Status",
            StatusTier::Obsidian => "Obsidian Status",
        }
    }

    pub fn color(self) -> Color {
        match self {
            StatusTier::Blue => Color::from_rgb8(0x58, 0x8b, 0xbb),
            StatusTier::Silver => Color::from_rgb8(0xa7, 0xab, 0xae),
            StatusTier::Gold => Color::from_rgb8(0xb4, 0x91, 0x50),
            StatusTier::Platinum => Color::from_rgb8(0x57, 0x6c, 0x81),
            StatusTier::Obsidian => Color::from_rgb8(0x27, 0x25, 0x32),
        }
    }

    /// Cycles to the next tier, wrapping after the last
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&tier| tier == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl Default for StatusTier {
    fn default() -> Self {
        StatusTier::Blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_colors_match_hex() {
        assert_eq!(StatusTier::Gold.color(), Color::from_hex("#b49150").unwrap());
        assert_eq!(StatusTier::Platinum.color(), Color::from_hex("#576C81").unwrap());
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(StatusTier::Blue.next(), StatusTier::Silver);
        assert_eq!(StatusTier::Obsidian.next(), StatusTier::Blue);
    }
}
