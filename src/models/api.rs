use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::roadmap::{MilestoneEntry, MilestoneUpdate};

/// Body of a roadmap creation request.
///
/// Every field is optional at the wire level so that missing fields can be
/// reported together instead of as a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoadmapInput {
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub interests: Option<Vec<String>>,
    pub timeframe: Option<TimeframeInput>,
}

/// Timeframe as sent by clients.
///
/// Deserialization never fails on the value itself; anything that is not an
/// integer or numeric string lands in `Other` and is rejected as non-numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeframeInput {
    Months(i64),
    Text(String),
    Other(Value),
}

impl TimeframeInput {
    /// The timeframe as an integer, or `None` when it is not numeric.
    ///
    /// Floats are truncated toward zero, so `6.0` and `6.5` both give 6.
    /// Booleans are not numbers here.
    pub fn months(&self) -> Option<i64> {
        match self {
            Self::Months(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Other(value) => value
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64),
        }
    }
}

impl From<u32> for TimeframeInput {
    fn from(months: u32) -> Self {
        Self::Months(i64::from(months))
    }
}

/// Body of a milestone update request.
///
/// `completed` follows JSON truthiness: `false`, `null`, `0`, `""`, `[]` and
/// `{}` are false, anything else is true. Only an absent field is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMilestoneInput {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed: Option<Value>,
}

impl UpdateMilestoneInput {
    pub fn new(completed: bool) -> Self {
        Self {
            completed: Some(Value::Bool(completed)),
        }
    }

    /// The requested flag, or `None` when the field was left out.
    pub fn completed(&self) -> Option<bool> {
        self.completed.as_ref().map(truthy)
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it is not mistaken for
/// a missing field.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Response to a successful roadmap creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoadmapResponse {
    pub message: String,
    pub roadmap_id: Uuid,
    pub summary: RoadmapSummary,
}

/// Short description of a freshly created roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapSummary {
    pub name: String,
    /// Human readable, e.g. `"6 months"`.
    pub timeframe: String,
    pub paths: Vec<String>,
    pub milestones_count: usize,
}

/// Response to a successful milestone update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneUpdateResponse {
    pub message: String,
    #[serde(flatten)]
    pub update: MilestoneUpdate,
}

impl MilestoneUpdateResponse {
    pub fn milestone(&self) -> &MilestoneEntry {
        &self.update.milestone
    }
}

/// Available interest path ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsResponse {
    pub available_paths: Vec<String>,
    pub description: String,
}

/// Service index returned by the API root.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointInfo>,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}
