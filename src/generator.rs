//! Roadmap generation.
//!
//! Turns a name, a list of interest path ids and a timeframe into a [`Roadmap`]:
//! a prefix of each path's milestones spread evenly across the timeframe,
//! merged and ordered by date, plus sampled resources, tips and a quote.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::RoadmapError;
use crate::models::*;

/// Generates roadmaps from a catalog using a shared random source.
///
/// The random source only drives resource/tip sampling and quote selection.
/// Roadmap ids always come from `Uuid::new_v4`, so two generators seeded
/// identically still never hand out the same id.
#[derive(Debug)]
pub struct RoadmapGenerator {
    catalog: &'static Catalog,
    rng: Mutex<StdRng>,
}

impl RoadmapGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new(catalog: &'static Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed, for reproducible sampling.
    pub fn seeded(catalog: &'static Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: &'static Catalog, rng: StdRng) -> Self {
        Self {
            catalog,
            rng: Mutex::new(rng),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Generate a roadmap starting now. The result is not stored.
    pub fn generate(&self, request: &RoadmapRequest) -> Result<Roadmap, RoadmapError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_roadmap(self.catalog, &mut *rng, request, Utc::now())
    }

    pub fn random_quote(&self) -> Quote {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.catalog.random_quote(&mut *rng)
    }
}

/// Generate a roadmap created at `created_at`, drawing samples from `rng`.
pub fn generate_roadmap<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
    request: &RoadmapRequest,
    created_at: DateTime<Utc>,
) -> Result<Roadmap, RoadmapError> {
    let paths = resolve_paths(catalog, request)?;
    let timeframe = request.timeframe;

    let mut milestones = Vec::new();
    for path in &paths {
        milestones.extend(path_milestones(path, timeframe, created_at));
    }
    // Stable: entries on the same date keep interest order.
    milestones.sort_by_key(|m| m.target_date);

    let resources = paths
        .iter()
        .map(|p| {
            let picked = sample(&mut *rng, p.resources, RESOURCES_PER_INTEREST);
            (p.id.to_string(), picked)
        })
        .collect::<BTreeMap<_, _>>();
    let tips = paths
        .iter()
        .map(|p| (p.id.to_string(), sample(&mut *rng, p.tips, TIPS_PER_INTEREST)))
        .collect::<BTreeMap<_, _>>();
    let quote = catalog.random_quote(rng);

    Ok(Roadmap {
        id: Uuid::new_v4(),
        name: request.name.clone(),
        email: request.email.clone(),
        interests: request.interests.clone(),
        timeframe,
        created_at,
        end_date: offset_date(created_at, timeframe * DAYS_PER_MONTH),
        milestones,
        resources,
        tips,
        quote,
    })
}

/// Days between consecutive milestones of one path.
///
/// Leaves a gap before the first and after the last milestone. May be zero
/// when many milestones share a short timeframe; those then share a date.
pub fn milestone_spacing_days(timeframe: u32, milestone_count: usize) -> u32 {
    let slots = u32::try_from(milestone_count).unwrap_or(u32::MAX).saturating_add(1);
    timeframe * DAYS_PER_MONTH / slots
}

fn resolve_paths(
    catalog: &Catalog,
    request: &RoadmapRequest,
) -> Result<Vec<&'static InterestPath>, RoadmapError> {
    if !(MIN_TIMEFRAME_MONTHS..=MAX_TIMEFRAME_MONTHS).contains(&request.timeframe) {
        return Err(RoadmapError::validation(format!(
            "Timeframe must be between {} and {} months",
            MIN_TIMEFRAME_MONTHS, MAX_TIMEFRAME_MONTHS
        )));
    }
    if request.interests.is_empty() {
        return Err(RoadmapError::validation("At least one interest is required"));
    }

    request
        .interests
        .iter()
        .map(|id| {
            catalog
                .get(id)
                .ok_or_else(|| RoadmapError::validation(format!("Unknown interest path: {}", id)))
        })
        .collect()
}

fn path_milestones(
    path: &InterestPath,
    timeframe: u32,
    created_at: DateTime<Utc>,
) -> impl Iterator<Item = MilestoneEntry> + '_ {
    let count = (timeframe as usize).min(path.milestones.len());
    let spacing = milestone_spacing_days(timeframe, count);

    path.milestones[..count]
        .iter()
        .zip(1u32..)
        .map(move |(milestone, slot)| MilestoneEntry {
            path: path.id.to_string(),
            milestone: milestone.to_string(),
            target_date: offset_date(created_at, slot * spacing),
            completed: false,
        })
}

fn sample<R: Rng + ?Sized>(rng: &mut R, items: &[&str], limit: usize) -> Vec<String> {
    items
        .choose_multiple(rng, limit.min(items.len()))
        .map(|s| s.to_string())
        .collect()
}

fn offset_date(start: DateTime<Utc>, days: u32) -> NaiveDate {
    (start + Duration::days(i64::from(days))).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const CROWDED: &[InterestPath] = &[InterestPath {
        id: "crowded",
        resources: &["a", "b"],
        milestones: &["m1", "m2", "m3", "m4", "m5", "m6", "m7", "m8", "m9", "m10"],
        tips: &["t1"],
    }];
    static CROWDED_CATALOG: Catalog = Catalog::new(CROWDED, &[]);

    fn request(interests: &[&str], timeframe: u32) -> RoadmapRequest {
        RoadmapRequest {
            name: "Test User".to_string(),
            email: None,
            interests: interests.iter().map(|s| s.to_string()).collect(),
            timeframe,
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn spacing_leaves_gap_before_first_and_after_last() {
        assert_eq!(milestone_spacing_days(1, 1), 15);
        assert_eq!(milestone_spacing_days(6, 5), 30);
        assert_eq!(milestone_spacing_days(3, 3), 22);
    }

    #[test]
    fn spacing_never_divides_by_zero() {
        assert_eq!(milestone_spacing_days(1, 0), 30);
    }

    #[test]
    fn single_month_single_milestone_lands_mid_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let roadmap =
            generate_roadmap(Catalog::builtin(), &mut rng, &request(&["frontend"], 1), start())
                .unwrap();

        assert_eq!(roadmap.milestones.len(), 1);
        assert_eq!(
            roadmap.milestones[0].target_date,
            NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()
        );
        assert_eq!(roadmap.end_date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }

    #[test]
    fn ties_keep_interest_order() {
        let mut rng = StdRng::seed_from_u64(2);
        let roadmap = generate_roadmap(
            Catalog::builtin(),
            &mut rng,
            &request(&["backend", "frontend"], 6),
            start(),
        )
        .unwrap();

        let first_two: Vec<_> = roadmap.milestones[..2].iter().map(|m| m.path.as_str()).collect();
        assert_eq!(first_two, ["backend", "frontend"]);
        assert_eq!(roadmap.milestones[0].target_date, roadmap.milestones[1].target_date);
    }

    #[test]
    fn crowded_path_takes_prefix_in_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let roadmap =
            generate_roadmap(&CROWDED_CATALOG, &mut rng, &request(&["crowded"], 4), start())
                .unwrap();

        let names: Vec<_> = roadmap.milestones.iter().map(|m| m.milestone.as_str()).collect();
        assert_eq!(names, ["m1", "m2", "m3", "m4"]);
        assert_eq!(roadmap.resources["crowded"].len(), 2);
        assert_eq!(roadmap.tips["crowded"], ["t1"]);
    }

    #[test]
    fn rejects_out_of_range_timeframe() {
        let mut rng = StdRng::seed_from_u64(4);
        for timeframe in [0, 25] {
            let err = generate_roadmap(
                Catalog::builtin(),
                &mut rng,
                &request(&["frontend"], timeframe),
                start(),
            )
            .unwrap_err();
            assert!(matches!(err, RoadmapError::Validation(_)));
        }
    }

    #[test]
    fn rejects_empty_and_unknown_interests() {
        let mut rng = StdRng::seed_from_u64(5);
        let empty = generate_roadmap(Catalog::builtin(), &mut rng, &request(&[], 6), start());
        let unknown = generate_roadmap(
            Catalog::builtin(),
            &mut rng,
            &request(&["frontend", "invalid_path"], 6),
            start(),
        );
        assert!(matches!(empty, Err(RoadmapError::Validation(_))));
        assert!(matches!(unknown, Err(RoadmapError::Validation(_))));
    }

    #[test]
    fn same_seed_samples_the_same_resources() {
        let req = request(&["devops", "security"], 12);
        let a = generate_roadmap(Catalog::builtin(), &mut StdRng::seed_from_u64(9), &req, start())
            .unwrap();
        let b = generate_roadmap(Catalog::builtin(), &mut StdRng::seed_from_u64(9), &req, start())
            .unwrap();

        assert_eq!(a.resources, b.resources);
        assert_eq!(a.tips, b.tips);
        assert_eq!(a.quote, b.quote);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn generator_keeps_email() {
        let generator = RoadmapGenerator::seeded(Catalog::builtin(), 11);
        let mut req = request(&["mobile"], 2);
        req.email = Some("ada@example.com".to_string());

        let roadmap = generator.generate(&req).unwrap();
        assert_eq!(roadmap.email.as_deref(), Some("ada@example.com"));
        assert_eq!(roadmap.milestones.len(), 2);
    }
}
