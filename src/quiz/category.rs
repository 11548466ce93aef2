//! The fixed, ordered set of life categories.

use std::fmt;
use std::str::FromStr;

use super::error::RatingError;

/// One of the eight life areas rated by the quiz.
///
/// The declaration order is the canonical order used for display and for
/// serialized rating sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Health,
    Career,
    Finances,
    Relationships,
    Growth,
    Fun,
    Spirituality,
    Environment,
}

impl Category {
    /// Number of categories in a rating set.
    pub const COUNT: usize = 8;

    /// All categories in canonical order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Health,
        Category::Career,
        Category::Finances,
        Category::Relationships,
        Category::Growth,
        Category::Fun,
        Category::Spirituality,
        Category::Environment,
    ];

    /// Wire identifiers, in canonical order.
    pub const IDS: [&'static str; Self::COUNT] = [
        "health",
        "career",
        "finances",
        "relationships",
        "growth",
        "fun",
        "spirituality",
        "environment",
    ];

    /// Identifier used as the JSON key.
    pub fn id(self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Career => "career",
            Category::Finances => "finances",
            Category::Relationships => "relationships",
            Category::Growth => "growth",
            Category::Fun => "fun",
            Category::Spirituality => "spirituality",
            Category::Environment => "environment",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Career => "Career",
            Category::Finances => "Finances",
            Category::Relationships => "Relationships",
            Category::Growth => "Personal Growth",
            Category::Fun => "Fun",
            Category::Spirituality => "Spirituality",
            Category::Environment => "Environment",
        }
    }

    /// Short description shown next to the label.
    pub fn description(self) -> &'static str {
        match self {
            Category::Health => "Physical and mental wellbeing",
            Category::Career => "Work satisfaction and progress",
            Category::Finances => "Financial stability and growth",
            Category::Relationships => "Quality of personal connections",
            Category::Growth => "Learning and self-improvement",
            Category::Fun => "Enjoyment and recreation",
            Category::Spirituality => "Sense of meaning and purpose",
            Category::Environment => "Living space and surroundings",
        }
    }

    /// Look up a category by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| RatingError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_canonical_order() {
        let ids: Vec<_> = Category::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids, Category::IDS);
    }

    #[test]
    fn test_parse_round_trips_every_id() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_unknown_id() {
        let err = "wealth".parse::<Category>().unwrap_err();
        assert!(matches!(err, RatingError::UnknownCategory(ref id) if id == "wealth"));
    }

    #[test]
    fn test_growth_label_differs_from_id() {
        assert_eq!(Category::Growth.label(), "Personal Growth");
        assert_eq!(Category::Growth.to_string(), "growth");
    }
}
