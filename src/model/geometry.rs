//! Anchor point and resolved card geometry

/// Shared center point from which all card positions are offset.
///
/// Computed from the terminal area each frame and passed into the layout
/// resolver explicitly, so the resolver has no ambient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of a terminal area of the given size.
    pub fn from_terminal_size(width: u16, height: u16) -> Self {
        Self {
            x: f64::from(width) / 2.0,
            y: f64::from(height) / 2.0,
        }
    }
}

/// Resolved on-screen placement of a card.
///
/// Transient: recomputed whenever the anchor or the config changes, unless
/// a drag override is active for the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CardGeometry {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Same size at a different position. Used by the drag layer, which
    /// overrides placement but never the resolved dimensions.
    pub fn moved_to(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }
}
