//! The closed mood model: labels, dual-axis coordinates, and alias resolution.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// A position on the valence/energy plane, both axes in `[-1, 1]`.
///
/// Valence is emotional positivity, energy is activation level. Coordinates
/// are derived from a mood label and never stored with an entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodCoordinate {
    pub valence: f64,
    pub energy: f64,
}

/// The neutral point every unrecognized label degrades to.
pub const NEUTRAL: MoodCoordinate = MoodCoordinate {
    valence: 0.0,
    energy: 0.0,
};

/// The closed set of mood labels.
///
/// Canonical labels are the kebab-case variant names (`"happy"`,
/// `"melancholic"`, ...). User-defined aliases from the config `[moods]`
/// table resolve to these through [`Moods`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Mood {
    Happy,
    Excited,
    Grateful,
    Inspired,
    Peaceful,
    Thoughtful,
    Melancholic,
    Tired,
    Anxious,
    Frustrated,
}

impl Mood {
    /// The mood's position on the valence/energy plane.
    pub fn coordinate(self) -> MoodCoordinate {
        let (valence, energy) = match self {
            Mood::Happy => (0.8, 0.4),
            Mood::Excited => (0.9, 0.9),
            Mood::Grateful => (0.9, 0.1),
            Mood::Inspired => (0.8, 0.7),
            Mood::Peaceful => (0.7, -0.4),
            Mood::Thoughtful => (0.1, -0.1),
            Mood::Melancholic => (-0.5, -0.4),
            Mood::Tired => (-0.3, -0.8),
            Mood::Anxious => (-0.6, 0.7),
            Mood::Frustrated => (-0.8, 0.6),
        };
        MoodCoordinate { valence, energy }
    }

    /// Display glyph shown next to the label.
    pub fn glyph(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Excited => "🎉",
            Mood::Grateful => "❤️",
            Mood::Inspired => "🌟",
            Mood::Peaceful => "😌",
            Mood::Thoughtful => "🤔",
            Mood::Melancholic => "😔",
            Mood::Tired => "😴",
            Mood::Anxious => "😰",
            Mood::Frustrated => "😤",
        }
    }

    /// Display color as an RGB triple.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Mood::Happy => (0x10, 0xb9, 0x81),
            Mood::Excited => (0x8b, 0x5c, 0xf6),
            Mood::Grateful => (0xec, 0x48, 0x99),
            Mood::Inspired => (0xf5, 0x9e, 0x0b),
            Mood::Peaceful => (0x63, 0x66, 0xf1),
            Mood::Thoughtful => (0x64, 0x74, 0x8b),
            Mood::Melancholic => (0x0e, 0xa5, 0xe9),
            Mood::Tired => (0x94, 0xa3, 0xb8),
            Mood::Anxious => (0xf9, 0x73, 0x16),
            Mood::Frustrated => (0xef, 0x44, 0x44),
        }
    }

    pub fn quadrant(self) -> Quadrant {
        Quadrant::classify(self.coordinate())
    }
}

/// Result of resolving a free-form label against the mood model.
///
/// Entries store their mood as plain text, so a label may come from an older
/// model version or a typo. Resolution is total: anything the model does not
/// recognize is [`MoodLookup::Unknown`] and behaves as the neutral midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoodLookup {
    Known(Mood),
    Unknown,
}

impl MoodLookup {
    pub fn coordinate(self) -> MoodCoordinate {
        match self {
            MoodLookup::Known(mood) => mood.coordinate(),
            MoodLookup::Unknown => NEUTRAL,
        }
    }

    pub fn known(self) -> Option<Mood> {
        match self {
            MoodLookup::Known(mood) => Some(mood),
            MoodLookup::Unknown => None,
        }
    }
}

/// Region of the valence/energy plane a mood falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Quadrant {
    #[strum(serialize = "High Energy Positive")]
    HighEnergyPositive,
    #[strum(serialize = "Low Energy Positive")]
    LowEnergyPositive,
    Neutral,
    #[strum(serialize = "Low Energy Negative")]
    LowEnergyNegative,
    #[strum(serialize = "High Energy Negative")]
    HighEnergyNegative,
}

impl Quadrant {
    /// Near-zero valence is neutral regardless of energy; otherwise the
    /// sign pair decides.
    pub fn classify(coord: MoodCoordinate) -> Quadrant {
        if coord.valence.abs() < 0.3 {
            return Quadrant::Neutral;
        }
        match (coord.valence > 0.0, coord.energy >= 0.0) {
            (true, true) => Quadrant::HighEnergyPositive,
            (true, false) => Quadrant::LowEnergyPositive,
            (false, true) => Quadrant::HighEnergyNegative,
            (false, false) => Quadrant::LowEnergyNegative,
        }
    }
}

/// Global mood-label registry (input → canonical mood).
///
/// Seeded once with the canonical labels, lowercased for case-insensitive
/// lookups, and extended with user aliases during `Config::load()`.
pub struct Moods;

impl Moods {
    fn registry() -> &'static RwLock<HashMap<String, Mood>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, Mood>>> = Lazy::new(|| {
            let mut m = HashMap::new();
            for mood in Mood::iter() {
                m.insert(mood.as_ref().to_string(), mood);
            }
            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Extends the registry with user-defined aliases.
    ///
    /// Each pair is `(alias, target)`. The target must already resolve to a
    /// canonical mood; unknown targets are ignored silently. Keys are
    /// lowercased.
    pub fn extend(aliases: &[(String, String)]) {
        let mut reg = Self::registry().write().unwrap();
        for (alias, target) in aliases {
            if let Some(&canonical) = reg.get(&target.to_lowercase()) {
                reg.insert(alias.to_lowercase(), canonical);
            }
        }
    }

    /// Returns `true` if `label` is one of the canonical mood labels.
    pub fn is_canonical(label: &str) -> bool {
        Mood::iter().any(|mood| mood.as_ref() == label)
    }

    /// Resolves a label (canonical or alias, case-insensitive) to a mood.
    pub fn resolve(label: &str) -> MoodLookup {
        let reg = Self::registry().read().unwrap();
        match reg.get(label.trim().to_lowercase().as_str()) {
            Some(&mood) => MoodLookup::Known(mood),
            None => MoodLookup::Unknown,
        }
    }
}

/// Valence of a label, `0.0` when unrecognized. Never fails.
pub fn valence(label: &str) -> f64 {
    Moods::resolve(label).coordinate().valence
}

/// Energy of a label, `0.0` when unrecognized. Never fails.
pub fn energy(label: &str) -> f64 {
    Moods::resolve(label).coordinate().energy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_resolve() {
        assert_eq!(Moods::resolve("happy"), MoodLookup::Known(Mood::Happy));
        assert_eq!(Moods::resolve("HAPPY"), MoodLookup::Known(Mood::Happy));
        assert_eq!(
            Moods::resolve(" melancholic "),
            MoodLookup::Known(Mood::Melancholic)
        );
    }

    #[test]
    fn unknown_label_resolves_to_neutral() {
        let lookup = Moods::resolve("ecstatic");
        assert_eq!(lookup, MoodLookup::Unknown);
        assert_eq!(lookup.coordinate(), NEUTRAL);
        assert_eq!(valence("ecstatic"), 0.0);
        assert_eq!(energy("ecstatic"), 0.0);
    }

    #[test]
    fn aliases_extend() {
        Moods::extend(&[
            ("content".into(), "peaceful".into()),
            ("stoked".into(), "Excited".into()),
            ("blue".into(), "not-a-mood".into()),
        ]);
        assert_eq!(Moods::resolve("content"), MoodLookup::Known(Mood::Peaceful));
        assert_eq!(Moods::resolve("stoked"), MoodLookup::Known(Mood::Excited));
        assert_eq!(Moods::resolve("blue"), MoodLookup::Unknown);
    }

    #[test]
    fn polarity_groups_hold() {
        let positive = [Mood::Happy, Mood::Excited, Mood::Grateful, Mood::Inspired];
        for mood in positive {
            assert!(mood.coordinate().valence > 0.0, "{mood:?}");
        }
        let peaceful = Mood::Peaceful.coordinate();
        assert!(peaceful.valence > 0.0 && peaceful.energy < 0.0);
        assert!(Mood::Thoughtful.coordinate().valence.abs() < 0.3);
        for mood in [Mood::Melancholic, Mood::Tired] {
            let c = mood.coordinate();
            assert!(c.valence < 0.0 && c.energy < 0.0, "{mood:?}");
        }
        for mood in [Mood::Anxious, Mood::Frustrated] {
            let c = mood.coordinate();
            assert!(c.valence < 0.0 && c.energy > 0.0, "{mood:?}");
        }
    }

    #[test]
    fn coordinates_stay_in_bounds() {
        for mood in Mood::iter() {
            let c = mood.coordinate();
            assert!((-1.0..=1.0).contains(&c.valence), "{mood:?}");
            assert!((-1.0..=1.0).contains(&c.energy), "{mood:?}");
        }
    }

    #[test]
    fn quadrant_classification() {
        assert_eq!(Mood::Excited.quadrant(), Quadrant::HighEnergyPositive);
        assert_eq!(Mood::Grateful.quadrant(), Quadrant::HighEnergyPositive);
        assert_eq!(Mood::Peaceful.quadrant(), Quadrant::LowEnergyPositive);
        assert_eq!(Mood::Thoughtful.quadrant(), Quadrant::Neutral);
        assert_eq!(Mood::Tired.quadrant(), Quadrant::LowEnergyNegative);
        assert_eq!(Mood::Frustrated.quadrant(), Quadrant::HighEnergyNegative);
        assert_eq!(Quadrant::classify(NEUTRAL), Quadrant::Neutral);
    }
}
