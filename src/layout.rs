//! Layout resolver - card positions from the shared anchor
//!
//! Pure functions: identical inputs always produce identical geometry,
//! which is what keeps dragging stable (the resolver output only matters
//! when no drag override exists) and the formulas testable.

use crate::config::{CardStyle, CardStyles};
use crate::model::{Anchor, CardGeometry, CardKey};

/// Gap between adjacent cards, in terminal cells.
pub const CARD_SPACING: f64 = 2.0;

/// Extra width added to the music card for its transport controls.
pub const PLAYER_CHROME_WIDTH: f64 = 12.0;

/// Position of the music card.
///
/// Each axis honors its own override independently; when unset it falls
/// back to a formula over sibling geometry: horizontally the hi card's
/// width and this card's `offset` scalar, vertically the clock card's
/// `offset` and the calendar card's height. The sibling dependency edges
/// mirror the dashboard's coordinated layout and are kept as given.
pub fn music_card_geometry(anchor: Anchor, spacing: f64, styles: &CardStyles) -> CardGeometry {
    let style = &styles.music;

    let x = match style.offset_x {
        Some(offset_x) => anchor.x + offset_x,
        None => anchor.x + spacing + styles.hi.width / 2.0 - style.offset,
    };
    let y = match style.offset_y {
        Some(offset_y) => anchor.y + offset_y,
        None => anchor.y - styles.clock.offset + spacing + styles.calendar.height + spacing,
    };

    CardGeometry {
        x,
        y,
        width: style.width + PLAYER_CHROME_WIDTH,
        height: style.height,
    }
}

/// Position of a simple card: per-axis offset from the anchor, centered
/// on the anchor along any axis without an override.
pub fn anchored_geometry(anchor: Anchor, style: &CardStyle) -> CardGeometry {
    let x = match style.offset_x {
        Some(offset_x) => anchor.x + offset_x,
        None => anchor.x - style.width / 2.0,
    };
    let y = match style.offset_y {
        Some(offset_y) => anchor.y + offset_y,
        None => anchor.y - style.height / 2.0,
    };

    CardGeometry {
        x,
        y,
        width: style.width,
        height: style.height,
    }
}

/// Resolve any card by key.
pub fn card_geometry(key: CardKey, anchor: Anchor, styles: &CardStyles) -> CardGeometry {
    match key {
        CardKey::Music => music_card_geometry(anchor, CARD_SPACING, styles),
        _ => anchored_geometry(anchor, styles.get(key)),
    }
}
