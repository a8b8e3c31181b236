//! Life event types.
//!
//! A life event is a discrete, dated occurrence (promotion, medical
//! emergency, market downturn, ...) with a signed four-field impact on the
//! scenario's running totals. Events are immutable once attached to a
//! scenario; branching copies them by value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a life event.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(String);

impl EventId {
    /// Create an event ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random event ID.
    pub fn generate() -> Self {
        Self(format!("event-{}", Uuid::new_v4()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// How certain an event is to occur as modeled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    #[default]
    Medium,
    Low,
}

impl Confidence {
    /// Numeric score used when averaging confidence across events.
    pub fn score(&self) -> u32 {
        match self {
            Confidence::High => 3,
            Confidence::Medium => 2,
            Confidence::Low => 1,
        }
    }

    /// Lowercase label, matching the serialized form.
    pub fn as_str(&self) -> &str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signed deltas an event applies to the four running totals.
///
/// Each field is independent: a single event can raise expenses while
/// lowering assets (e.g. a home purchase).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
    #[serde(default)]
    pub assets: f64,
    #[serde(default)]
    pub liabilities: f64,
}

impl Impact {
    pub fn new(income: f64, expenses: f64, assets: f64, liabilities: f64) -> Self {
        Self {
            income,
            expenses,
            assets,
            liabilities,
        }
    }
}

/// A dated life event attached to a scenario.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LifeEvent {
    /// Unique identifier, generated on attachment
    pub id: EventId,
    /// Event type key, e.g. "promotion"
    pub event_type: String,
    /// Category key, e.g. "CAREER" (one of the catalog's top-level groups)
    pub category: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// When the event occurs. Day-of-month is not required to align with
    /// any particular day; simulation matches on year and month only.
    pub date: DateTime<Utc>,
    /// Likelihood in [0, 1]. Informational only: the simulation applies the
    /// full impact regardless of probability.
    pub probability: f64,
    /// Signed deltas applied to the running totals when the event fires
    pub impact: Impact,
    /// How certain the event is to occur as modeled
    pub confidence: Confidence,
    /// Free-form tags
    pub tags: Vec<String>,
    /// When the event was attached
    pub created_at: DateTime<Utc>,
}

impl LifeEvent {
    /// Build an event from a caller-supplied draft, filling defaults:
    /// probability 1.0, confidence medium, no tags, zeroed impact fields.
    pub fn from_draft(draft: EventDraft, id: EventId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            event_type: draft.event_type,
            category: draft.category,
            name: draft.name,
            description: draft.description,
            date: draft.date,
            probability: draft.probability.unwrap_or(1.0),
            impact: draft.impact,
            confidence: draft.confidence.unwrap_or_default(),
            tags: draft.tags.unwrap_or_default(),
            created_at: now,
        }
    }
}

/// Caller-supplied input for attaching an event to a scenario.
///
/// Optional fields are normalized by the registry when the event is
/// attached; see [`LifeEvent::from_draft`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventDraft {
    pub event_type: String,
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub impact: Impact,
    #[serde(default)]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl EventDraft {
    /// Minimal draft with the required fields; everything else takes the
    /// registry defaults.
    pub fn new(
        event_type: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            category: category.into(),
            name: name.into(),
            description: String::new(),
            date,
            probability: None,
            impact: Impact::default(),
            confidence: None,
            tags: None,
        }
    }

    pub fn with_impact(mut self, impact: Impact) -> Self {
        self.impact = impact;
        self
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}
