//! Bounded ratings, the per-attempt rating set, and derived display values.

use std::collections::BTreeSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::category::Category;
use super::error::RatingError;

/// A satisfaction value on the 1..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(10);
    /// Midpoint every category starts at.
    pub const NEUTRAL: Rating = Rating(5);

    /// Create a rating, rejecting values off the scale.
    pub fn new(value: i64) -> Result<Self, RatingError> {
        if (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }

    /// Create a rating, clamping values off the scale to the nearest bound.
    pub fn saturating(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        Rating(clamped as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Rating::new(value).map_err(de::Error::custom)
    }
}

/// One rating per category. All eight are always present.
///
/// Serialized as a flat object keyed by category id, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RatingSet {
    health: Rating,
    career: Rating,
    finances: Rating,
    relationships: Rating,
    growth: Rating,
    fun: Rating,
    spirituality: Rating,
    environment: Rating,
}

impl RatingSet {
    /// A rating set with every category at the neutral midpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rating set with every category at `rating`.
    pub fn uniform(rating: Rating) -> Self {
        Self {
            health: rating,
            career: rating,
            finances: rating,
            relationships: rating,
            growth: rating,
            fun: rating,
            spirituality: rating,
            environment: rating,
        }
    }

    /// Build a rating set from raw values given in canonical category order.
    pub fn from_values(values: [i64; Category::COUNT]) -> Result<Self, RatingError> {
        let mut set = Self::new();
        for (category, value) in Category::ALL.into_iter().zip(values) {
            set.set(category, Rating::new(value)?);
        }
        Ok(set)
    }

    pub fn get(&self, category: Category) -> Rating {
        match category {
            Category::Health => self.health,
            Category::Career => self.career,
            Category::Finances => self.finances,
            Category::Relationships => self.relationships,
            Category::Growth => self.growth,
            Category::Fun => self.fun,
            Category::Spirituality => self.spirituality,
            Category::Environment => self.environment,
        }
    }

    /// Replace the rating for one category, leaving the others unchanged.
    pub fn set(&mut self, category: Category, rating: Rating) {
        let slot = match category {
            Category::Health => &mut self.health,
            Category::Career => &mut self.career,
            Category::Finances => &mut self.finances,
            Category::Relationships => &mut self.relationships,
            Category::Growth => &mut self.growth,
            Category::Fun => &mut self.fun,
            Category::Spirituality => &mut self.spirituality,
            Category::Environment => &mut self.environment,
        };
        *slot = rating;
    }

    /// Builder-style variant of [`RatingSet::set`].
    pub fn with(mut self, category: Category, rating: Rating) -> Self {
        self.set(category, rating);
        self
    }

    /// Iterate `(category, rating)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Rating)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Arithmetic mean of the eight ratings.
    pub fn aggregate(&self) -> f64 {
        let sum: u32 = self.iter().map(|(_, r)| u32::from(r.get())).sum();
        f64::from(sum) / Category::COUNT as f64
    }
}

/// Accumulates map entries into a [`RatingSet`], enforcing that each
/// category appears exactly once.
#[derive(Debug, Default)]
pub(crate) struct RatingSetBuilder {
    ratings: RatingSet,
    seen: BTreeSet<Category>,
}

impl RatingSetBuilder {
    pub(crate) fn insert(&mut self, category: Category, rating: Rating) -> Result<(), RatingError> {
        if !self.seen.insert(category) {
            return Err(RatingError::DuplicateCategory(category.id()));
        }
        self.ratings.set(category, rating);
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<RatingSet, RatingError> {
        match Category::ALL.into_iter().find(|c| !self.seen.contains(c)) {
            Some(missing) => Err(RatingError::MissingCategory(missing.id())),
            None => Ok(self.ratings),
        }
    }
}

impl Serialize for RatingSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, rating) in self.iter() {
            map.serialize_entry(category.id(), &rating)?;
        }
        map.end()
    }
}

struct RatingSetVisitor;

impl<'de> Visitor<'de> for RatingSetVisitor {
    type Value = RatingSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping the eight category ids to ratings 1..=10")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RatingSet, A::Error> {
        let mut builder = RatingSetBuilder::default();
        while let Some(key) = map.next_key::<String>()? {
            let category = Category::from_id(&key)
                .ok_or_else(|| <A::Error as de::Error>::unknown_field(&key, &Category::IDS))?;
            let rating: Rating = map.next_value()?;
            builder
                .insert(category, rating)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        builder.finish().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for RatingSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RatingSetVisitor)
    }
}

/// Coarse feeling attached to a score, shown as an emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Unhappy,
    Neutral,
    Content,
    Happy,
}

impl Mood {
    /// Classify a rating or an aggregate score.
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            Mood::Unhappy
        } else if score <= 5.0 {
            Mood::Neutral
        } else if score <= 7.0 {
            Mood::Content
        } else {
            Mood::Happy
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Unhappy => "😞",
            Mood::Neutral => "😐",
            Mood::Content => "🙂",
            Mood::Happy => "😄",
        }
    }
}

impl From<Rating> for Mood {
    fn from(rating: Rating) -> Self {
        Mood::from_score(f64::from(rating.get()))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

/// Render a score the way results are shown, e.g. `5.5/10`.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}/10")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Rating::new(0), Err(RatingError::OutOfRange(0)));
        assert_eq!(Rating::new(11), Err(RatingError::OutOfRange(11)));
        assert_eq!(Rating::new(10).unwrap().get(), 10);
    }

    #[test]
    fn test_saturating_clamps() {
        assert_eq!(Rating::saturating(-4), Rating::MIN);
        assert_eq!(Rating::saturating(99), Rating::MAX);
        assert_eq!(Rating::saturating(7).get(), 7);
    }

    #[test]
    fn test_default_set_is_neutral() {
        let set = RatingSet::new();
        assert!(set.iter().all(|(_, r)| r == Rating::NEUTRAL));
        assert_eq!(set.aggregate(), 5.0);
    }

    #[test]
    fn test_alternating_extremes_average() {
        let set = RatingSet::from_values([1, 10, 1, 10, 1, 10, 1, 10]).unwrap();
        assert_eq!(set.aggregate(), 5.5);
    }

    #[test]
    fn test_set_touches_only_one_category() {
        let mut set = RatingSet::new();
        set.set(Category::Fun, Rating::MAX);
        for (category, rating) in set.iter() {
            let expected = if category == Category::Fun { Rating::MAX } else { Rating::NEUTRAL };
            assert_eq!(rating, expected, "{category}");
        }
    }

    #[test]
    fn test_serializes_in_canonical_order() {
        let set = RatingSet::new().with(Category::Health, Rating::new(8).unwrap());
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"health":8,"career":5,"finances":5,"relationships":5,"growth":5,"fun":5,"spirituality":5,"environment":5}"#
        );
    }

    #[test]
    fn test_deserialize_accepts_any_key_order() {
        let json = r#"{"environment":5,"spirituality":4,"fun":7,"growth":6,"relationships":9,"finances":5,"career":3,"health":8}"#;
        let set: RatingSet = serde_json::from_str(json).unwrap();
        assert_eq!(set, RatingSet::from_values([8, 3, 5, 9, 6, 7, 4, 5]).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_missing_category() {
        let json = r#"{"health":8,"career":3,"finances":5,"relationships":9,"growth":6,"fun":7,"spirituality":4}"#;
        let err = serde_json::from_str::<RatingSet>(json).unwrap_err();
        assert!(err.to_string().contains("environment"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_unknown_and_duplicate_keys() {
        let unknown = r#"{"health":8,"wealth":3}"#;
        assert!(serde_json::from_str::<RatingSet>(unknown).is_err());

        let duplicate = r#"{"health":8,"health":3}"#;
        let err = serde_json::from_str::<RatingSet>(duplicate).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        for value in ["0", "11", "5.5", "\"5\"", "null"] {
            let json = format!(
                r#"{{"health":{value},"career":3,"finances":5,"relationships":9,"growth":6,"fun":7,"spirituality":4,"environment":5}}"#
            );
            assert!(serde_json::from_str::<RatingSet>(&json).is_err(), "accepted {value}");
        }
    }

    #[test]
    fn test_mood_thresholds() {
        assert_eq!(Mood::from_score(3.0), Mood::Unhappy);
        assert_eq!(Mood::from_score(3.1), Mood::Neutral);
        assert_eq!(Mood::from_score(5.0), Mood::Neutral);
        assert_eq!(Mood::from_score(7.0), Mood::Content);
        assert_eq!(Mood::from_score(7.5), Mood::Happy);
        assert_eq!(Mood::from(Rating::MAX).emoji(), "😄");
    }

    #[test]
    fn test_format_score_one_decimal() {
        assert_eq!(format_score(5.5), "5.5/10");
        assert_eq!(format_score(47.0 / 8.0), "5.9/10");
    }
}
