//! Core type definitions for the dashboard

/// Identity of a card on the home screen.
///
/// The string id is stable across sessions and is the key under which the
/// drag layer remembers a user-moved position and the config file stores
/// per-card style overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKey {
    Hi,
    Clock,
    Calendar,
    Music,
}

impl CardKey {
    /// All cards, in declaration order (render order comes from config).
    pub const ALL: [CardKey; 4] = [CardKey::Hi, CardKey::Clock, CardKey::Calendar, CardKey::Music];

    pub fn id(self) -> &'static str {
        match self {
            CardKey::Hi => "hiCard",
            CardKey::Clock => "clockCard",
            CardKey::Calendar => "calendarCard",
            CardKey::Music => "musicCard",
        }
    }
}
