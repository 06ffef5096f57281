//! Card style and playlist configuration
//!
//! Styles and the playlist are read from a TOML file when one is found,
//! otherwise compiled-in defaults apply. Every field is optional in the
//! file; absent offset overrides stay `None` so the layout resolver's
//! fallback formulas take effect.

use anyhow::Context;
use serde::Deserialize;
use std::{env, fs};

use crate::model::{CardKey, Track};

#[derive(Debug, Clone)]
pub struct Config {
    pub cards: CardStyles,
    pub tracks: Vec<Track>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cards: CardStyles::default(),
            tracks: default_tracks(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut candidates = Vec::new();

        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join("homedeck.toml"));
            candidates.push(current_dir.join("config").join("homedeck.toml"));
        }

        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join("homedeck.toml"));
            }
        }

        for path in candidates {
            if path.exists() {
                let data = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                let doc: ConfigDocument = toml::from_str(&data)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?;
                return Ok(doc.into());
            }
        }

        Ok(Config::default())
    }
}

/// Per-card style record.
///
/// `offset_x` and `offset_y` are independent per-axis overrides; `None`
/// means "derive this axis from the anchor and sibling geometry", which is
/// why the unset state is a sentinel and never zero.
#[derive(Debug, Clone)]
pub struct CardStyle {
    pub width: f64,
    pub height: f64,
    /// Render order; higher draws later (on top) and wins hit-tests.
    pub order: i64,
    /// Scalar used by the derived-position formulas.
    pub offset: f64,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CardStyles {
    pub hi: CardStyle,
    pub clock: CardStyle,
    pub calendar: CardStyle,
    pub music: CardStyle,
}

impl Default for CardStyles {
    fn default() -> Self {
        Self {
            hi: CardStyle {
                width: 30.0,
                height: 5.0,
                order: 1,
                offset: 0.0,
                offset_x: Some(-36.0),
                offset_y: Some(-12.0),
            },
            clock: CardStyle {
                width: 26.0,
                height: 5.0,
                order: 2,
                offset: 4.0,
                offset_x: Some(8.0),
                offset_y: Some(-12.0),
            },
            calendar: CardStyle {
                width: 26.0,
                height: 6.0,
                order: 3,
                offset_x: Some(8.0),
                offset_y: Some(-5.0),
                offset: 0.0,
            },
            music: CardStyle {
                width: 34.0,
                height: 6.0,
                order: 4,
                offset: 2.0,
                // Both axes unset: the music card derives its position
                // from the anchor and its sibling cards.
                offset_x: None,
                offset_y: None,
            },
        }
    }
}

impl CardStyles {
    pub fn get(&self, key: CardKey) -> &CardStyle {
        match key {
            CardKey::Hi => &self.hi,
            CardKey::Clock => &self.clock,
            CardKey::Calendar => &self.calendar,
            CardKey::Music => &self.music,
        }
    }

    /// Card keys sorted by render order.
    pub fn render_order(&self) -> Vec<CardKey> {
        let mut keys = CardKey::ALL.to_vec();
        keys.sort_by_key(|key| self.get(*key).order);
        keys
    }
}

fn default_tracks() -> Vec<Track> {
    vec![
        Track::new(
            "Let Her Go - Passenger",
            "http://music.163.com/song/media/outer/url?id=2080057492.mp3",
        ),
        Track::new(
            "我记得 - 清晨大攀",
            "http://music.163.com/song/media/outer/url?id=2131522830.mp3",
        ),
        Track::new(
            "海底 - 一支榴莲",
            "http://music.163.com/song/media/outer/url?id=1430583016.mp3",
        ),
    ]
}

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    cards: CardsSection,
    #[serde(default)]
    playlist: Vec<TrackSection>,
}

#[derive(Debug, Default, Deserialize)]
struct CardsSection {
    hi: Option<CardSection>,
    clock: Option<CardSection>,
    calendar: Option<CardSection>,
    music: Option<CardSection>,
}

#[derive(Debug, Default, Deserialize)]
struct CardSection {
    width: Option<f64>,
    height: Option<f64>,
    order: Option<i64>,
    offset: Option<f64>,
    offset_x: Option<f64>,
    offset_y: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TrackSection {
    title: String,
    url: String,
}

impl From<ConfigDocument> for Config {
    fn from(value: ConfigDocument) -> Self {
        let defaults = CardStyles::default();
        let cards = CardStyles {
            hi: merge_card(defaults.hi, value.cards.hi),
            clock: merge_card(defaults.clock, value.cards.clock),
            calendar: merge_card(defaults.calendar, value.cards.calendar),
            music: merge_card(defaults.music, value.cards.music),
        };

        let tracks = if value.playlist.is_empty() {
            default_tracks()
        } else {
            value
                .playlist
                .into_iter()
                .map(|entry| Track::new(entry.title, entry.url))
                .collect()
        };

        Config { cards, tracks }
    }
}

fn merge_card(base: CardStyle, section: Option<CardSection>) -> CardStyle {
    let Some(section) = section else {
        return base;
    };
    CardStyle {
        width: section.width.unwrap_or(base.width),
        height: section.height.unwrap_or(base.height),
        order: section.order.unwrap_or(base.order),
        offset: section.offset.unwrap_or(base.offset),
        offset_x: section.offset_x.or(base.offset_x),
        offset_y: section.offset_y.or(base.offset_y),
    }
}
