//! Scalar reduction of a mood label to a single 1–10 score.

use crate::mood::{MoodCoordinate, Moods};

/// Upper bound of the score range. The lower bound is 1.
pub const SCALE: f64 = 10.0;

/// Score of the neutral coordinate: what valence 0 maps to, and what every
/// unrecognized label scores.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Reduces a mood label to a score in `[1, 10]`, rounded to one decimal.
///
/// Positive-valence moods get a further boost from high energy (engaged
/// positivity); negative-valence moods are pulled further down by it
/// (agitation rather than calm sadness):
///
/// ```text
/// base   = (valence + 1) * 5
/// adjust = valence >= 0 ? energy * 0.3 : -|energy| * 0.2
/// score  = clamp(base + adjust, 1, 10)
/// ```
///
/// Unrecognized labels score exactly [`NEUTRAL_SCORE`].
///
/// # Examples
///
/// ```
/// # use moodlog_core::analytics::score::mood_score;
/// assert_eq!(mood_score("happy"), 9.1);
/// assert_eq!(mood_score("frustrated"), 1.0);
/// assert_eq!(mood_score("not-a-mood"), 5.0);
/// ```
pub fn mood_score(label: &str) -> f64 {
    coordinate_score(Moods::resolve(label).coordinate())
}

/// Same reduction, starting from an already-resolved coordinate.
pub fn coordinate_score(coord: MoodCoordinate) -> f64 {
    let base = (coord.valence + 1.0) * (SCALE / 2.0);
    let adjust = if coord.valence >= 0.0 {
        coord.energy * 0.3
    } else {
        -coord.energy.abs() * 0.2
    };
    round1((base + adjust).clamp(1.0, SCALE))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;
    use strum::IntoEnumIterator;

    #[test]
    fn exact_scores_per_label() {
        let expected = [
            (Mood::Frustrated, 1.0),
            (Mood::Anxious, 1.9),
            (Mood::Melancholic, 2.4),
            (Mood::Tired, 3.3),
            (Mood::Thoughtful, 5.5),
            (Mood::Peaceful, 8.4),
            (Mood::Happy, 9.1),
            (Mood::Inspired, 9.2),
            (Mood::Grateful, 9.5),
            (Mood::Excited, 9.8),
        ];
        for (mood, score) in expected {
            assert_eq!(mood_score(mood.as_ref()), score, "{mood:?}");
        }
    }

    #[test]
    fn scores_stay_in_bounds() {
        for mood in Mood::iter() {
            let score = mood_score(mood.as_ref());
            assert!((1.0..=SCALE).contains(&score), "{mood:?} -> {score}");
        }
    }

    #[test]
    fn score_sign_follows_valence() {
        for mood in Mood::iter() {
            let valence = mood.coordinate().valence;
            if valence.abs() <= 0.3 {
                continue;
            }
            let diff = mood_score(mood.as_ref()) - NEUTRAL_SCORE;
            assert_eq!(diff.signum(), valence.signum(), "{mood:?}");
        }
    }

    #[test]
    fn frustrated_clamps_at_floor() {
        // base 1.0 with a negative adjustment would land below the range.
        assert_eq!(mood_score("frustrated"), 1.0);
    }

    #[test]
    fn unknown_label_scores_neutral() {
        assert_eq!(mood_score("jubilant"), NEUTRAL_SCORE);
        assert_eq!(mood_score(""), NEUTRAL_SCORE);
    }

    #[test]
    fn label_resolution_is_case_insensitive() {
        assert_eq!(mood_score("Peaceful"), mood_score("peaceful"));
    }
}
