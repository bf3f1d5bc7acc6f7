//! Dashboard Controls
//! The three user inputs that drive the insight and trend pipelines.

use std::fmt;
use tracing::warn;

/// Cuisine filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cuisine {
    #[default]
    All,
    Italian,
    Mexican,
    Chinese,
    Indian,
    American,
}

impl Cuisine {
    pub const ALL: [Cuisine; 6] = [
        Cuisine::All,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::Chinese,
        Cuisine::Indian,
        Cuisine::American,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Cuisine::All => "All",
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Chinese => "Chinese",
            Cuisine::Indian => "Indian",
            Cuisine::American => "American",
        }
    }

    /// Category substring to match, `None` for no cuisine filtering.
    pub fn category_keyword(self) -> Option<&'static str> {
        match self {
            Cuisine::All => None,
            other => Some(other.label()),
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum star rating, kept within [1, 5] on half-star steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingThreshold(f64);

impl RatingThreshold {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 5.0;
    pub const STEP: f64 = 0.5;

    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        let snapped = (value / Self::STEP).round() * Self::STEP;
        Self(snapped.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for RatingThreshold {
    fn default() -> Self {
        Self(3.5)
    }
}

impl fmt::Display for RatingThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Current values of all dashboard controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlValues {
    /// `None` only when the restaurant table has no states at all.
    pub state: Option<String>,
    pub cuisine: Cuisine,
    pub min_rating: RatingThreshold,
}

impl ControlValues {
    /// Resolve the preferred default state against the available options,
    /// falling back to the first option when it is missing.
    pub fn resolve(
        state_options: &[String],
        preferred_state: &str,
        cuisine: Cuisine,
        min_rating: RatingThreshold,
    ) -> Self {
        let state = if state_options.iter().any(|s| s == preferred_state) {
            Some(preferred_state.to_string())
        } else {
            let fallback = state_options.first().cloned();
            warn!(
                preferred = preferred_state,
                fallback = ?fallback,
                "default state not present in restaurant data"
            );
            fallback
        };

        Self {
            state,
            cuisine,
            min_rating,
        }
    }
}
