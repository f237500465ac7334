//! Core domain types used throughout the recommendation service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Identifier assigned by the store when a recommendation is created
pub type RecommendationId = i64;

/// A stored recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: RecommendationId,
    pub name: String,
    pub youtube_link: String,
    pub score: i64,
}

/// Data needed to create a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub name: String,
    pub youtube_link: String,
}

impl NewRecommendation {
    pub fn new(name: impl Into<String>, youtube_link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            youtube_link: youtube_link.into(),
        }
    }
}

/// Atomic score mutation applied by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreOperation {
    Increment,
    Decrement,
}

impl ScoreOperation {
    /// Signed amount added to the score
    pub fn delta(self) -> i64 {
        match self {
            ScoreOperation::Increment => 1,
            ScoreOperation::Decrement => -1,
        }
    }
}

impl fmt::Display for ScoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreOperation::Increment => write!(f, "increment"),
            ScoreOperation::Decrement => write!(f, "decrement"),
        }
    }
}

impl FromStr for ScoreOperation {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increment" => Ok(ScoreOperation::Increment),
            "decrement" => Ok(ScoreOperation::Decrement),
            _ => Err(SharedError::InvalidTag {
                kind: "score operation",
                input: s.to_string(),
            }),
        }
    }
}

/// Comparison used when listing recommendations by score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreFilter {
    /// score <= threshold
    Lte,
    /// score > threshold
    Gt,
}

impl ScoreFilter {
    pub fn matches(self, score: i64, threshold: i64) -> bool {
        match self {
            ScoreFilter::Lte => score <= threshold,
            ScoreFilter::Gt => score > threshold,
        }
    }
}

impl fmt::Display for ScoreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreFilter::Lte => write!(f, "lte"),
            ScoreFilter::Gt => write!(f, "gt"),
        }
    }
}

impl FromStr for ScoreFilter {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lte" => Ok(ScoreFilter::Lte),
            "gt" => Ok(ScoreFilter::Gt),
            _ => Err(SharedError::InvalidTag {
                kind: "score filter",
                input: s.to_string(),
            }),
        }
    }
}

/// Range filter for listing recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreQuery {
    pub score: i64,
    pub score_filter: ScoreFilter,
}

impl ScoreQuery {
    pub fn new(score: i64, score_filter: ScoreFilter) -> Self {
        Self { score, score_filter }
    }

    pub fn matches(&self, recommendation: &Recommendation) -> bool {
        self.score_filter.matches(recommendation.score, self.score)
    }
}

/// Error categories surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Conflict,
    NotFound,
    UnprocessableEntity,
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::UnprocessableEntity => "unprocessable_entity",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
