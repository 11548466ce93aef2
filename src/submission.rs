//! Wire records exchanged between the quiz client and the submission server.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::quiz::{Category, Rating, RatingSet};
use crate::quiz::rating::RatingSetBuilder;

/// JSON key holding the server-assigned timestamp.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Acknowledgment message returned with every accepted submission.
pub const SCORES_RECEIVED: &str = "Scores received by backend!";

/// A rating set stamped by the server at the moment of receipt.
///
/// Serialized flat: the eight category fields followed by `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    ratings: RatingSet,
    timestamp: String,
}

impl SubmissionRecord {
    pub fn new(ratings: RatingSet, timestamp: impl Into<String>) -> Self {
        Self {
            ratings,
            timestamp: timestamp.into(),
        }
    }

    pub fn ratings(&self) -> &RatingSet {
        &self.ratings
    }

    /// ISO-8601 receipt time.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn aggregate(&self) -> f64 {
        self.ratings.aggregate()
    }
}

impl Serialize for SubmissionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT + 1))?;
        for (category, rating) in self.ratings.iter() {
            map.serialize_entry(category.id(), &rating)?;
        }
        map.serialize_entry(TIMESTAMP_FIELD, &self.timestamp)?;
        map.end()
    }
}

struct SubmissionRecordVisitor;

impl<'de> Visitor<'de> for SubmissionRecordVisitor {
    type Value = SubmissionRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a submission record with eight ratings and a timestamp")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SubmissionRecord, A::Error> {
        let mut builder = RatingSetBuilder::default();
        let mut timestamp: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == TIMESTAMP_FIELD {
                if timestamp.is_some() {
                    return Err(de::Error::duplicate_field(TIMESTAMP_FIELD));
                }
                timestamp = Some(map.next_value()?);
                continue;
            }
            let category = Category::from_id(&key)
                .ok_or_else(|| <A::Error as de::Error>::unknown_field(&key, &Category::IDS))?;
            let rating: Rating = map.next_value()?;
            builder
                .insert(category, rating)
                .map_err(<A::Error as de::Error>::custom)?;
        }

        let timestamp =
            timestamp.ok_or_else(|| <A::Error as de::Error>::missing_field(TIMESTAMP_FIELD))?;
        let ratings = builder
            .finish()
            .map_err(<A::Error as de::Error>::custom)?;
        Ok(SubmissionRecord { ratings, timestamp })
    }
}

impl<'de> Deserialize<'de> for SubmissionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SubmissionRecordVisitor)
    }
}

/// Body of a successful `POST /api/submit-scores` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    pub submission: SubmissionRecord,
}

impl SubmitResponse {
    /// Acknowledge a stored record.
    pub fn received(submission: SubmissionRecord) -> Self {
        Self {
            message: SCORES_RECEIVED.to_string(),
            submission,
        }
    }
}
