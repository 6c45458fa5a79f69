//! Pure, request-scoped analytics over entry slices.
//!
//! Every function here is total: any slice of entries (including an empty
//! one) produces a well-formed result. Callers own the entries; nothing in
//! this module touches disk or caches state between calls.

pub mod aggregate;
pub mod score;
pub mod stats;
pub mod streaks;
pub mod topics;

pub use aggregate::{Dimension, GroupSummary, breakdown};
pub use score::{NEUTRAL_SCORE, SCALE, mood_score};
pub use stats::{MoodStats, Trend, stats};
pub use streaks::{current_streak, longest_gap, longest_streak};
pub use topics::{TopicCount, TopicOptions, top_topics};
