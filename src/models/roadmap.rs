use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::Quote;

/// Shortest timeframe a roadmap can span, in months.
pub const MIN_TIMEFRAME_MONTHS: u32 = 1;
/// Longest timeframe a roadmap can span, in months.
pub const MAX_TIMEFRAME_MONTHS: u32 = 24;
/// Length of a "month" for date arithmetic. Not calendar accurate.
pub const DAYS_PER_MONTH: u32 = 30;
/// Resources sampled per interest.
pub const RESOURCES_PER_INTEREST: usize = 3;
/// Tips sampled per interest.
pub const TIPS_PER_INTEREST: usize = 2;

/// A generated learning roadmap.
///
/// Everything except the `completed` flag of each milestone is fixed at
/// creation. Milestones are ordered by `target_date`; entries sharing a date
/// keep the order in which they were generated (interest order, then path order).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roadmap {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Interest path ids as supplied by the caller. Duplicates are kept.
    pub interests: Vec<String>,
    /// Timeframe in months.
    pub timeframe: u32,
    pub created_at: DateTime<Utc>,
    pub end_date: NaiveDate,
    pub milestones: Vec<MilestoneEntry>,
    /// Sampled resources keyed by interest id.
    pub resources: BTreeMap<String, Vec<String>>,
    /// Sampled tips keyed by interest id.
    pub tips: BTreeMap<String, Vec<String>>,
    pub quote: Quote,
}

impl Roadmap {
    pub fn completed_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }

    /// True when every milestone is completed.
    pub fn all_completed(&self) -> bool {
        self.milestones.iter().all(|m| m.completed)
    }

    /// Percentage of completed milestones. An empty roadmap reports 0.
    pub fn progress(&self) -> f64 {
        if self.milestones.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.milestones.len() as f64 * 100.0
    }
}

/// A dated goal drawn from an interest path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MilestoneEntry {
    /// Id of the interest path this milestone came from.
    pub path: String,
    pub milestone: String,
    pub target_date: NaiveDate,
    pub completed: bool,
}

/// Validated input to roadmap generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapRequest {
    pub name: String,
    pub email: Option<String>,
    pub interests: Vec<String>,
    pub timeframe: u32,
}

/// Outcome of toggling a milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MilestoneUpdate {
    pub milestone: MilestoneEntry,
    pub all_completed: bool,
    /// Completed share of the roadmap, 0 to 100.
    pub progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roadmap_with(flags: &[bool]) -> Roadmap {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Roadmap {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: None,
            interests: vec!["frontend".to_string()],
            timeframe: 3,
            created_at: Utc::now(),
            end_date: date,
            milestones: flags
                .iter()
                .map(|&completed| MilestoneEntry {
                    path: "frontend".to_string(),
                    milestone: "Learn HTML".to_string(),
                    target_date: date,
                    completed,
                })
                .collect(),
            resources: BTreeMap::new(),
            tips: BTreeMap::new(),
            quote: Quote::new("Keep going.", "Anonymous"),
        }
    }

    #[test]
    fn progress_is_zero_for_empty_roadmap() {
        let roadmap = roadmap_with(&[]);
        assert_eq!(roadmap.progress(), 0.0);
    }

    #[test]
    fn progress_counts_completed_share() {
        let roadmap = roadmap_with(&[true, false, false, true]);
        assert_eq!(roadmap.completed_count(), 2);
        assert_eq!(roadmap.progress(), 50.0);
        assert!(!roadmap.all_completed());
    }

    #[test]
    fn all_completed_requires_every_milestone() {
        assert!(roadmap_with(&[true, true]).all_completed());
        assert_eq!(roadmap_with(&[true, true]).progress(), 100.0);
    }

    #[test]
    fn email_is_omitted_when_absent() {
        let json = serde_json::to_value(roadmap_with(&[false])).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["milestones"][0]["target_date"], "2025-01-01");
    }
}
