//! Roadmap storage.
//!
//! Roadmaps live in process memory only; there is no deletion and nothing
//! survives a restart. The [`RoadmapStore`] trait is the seam a persistent
//! backend would plug into.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use uuid::Uuid;

use crate::error::RoadmapError;
use crate::models::{MilestoneUpdate, Roadmap};

pub trait RoadmapStore: Send + Sync {
    /// Insert a fully generated roadmap under its id.
    fn create(&self, roadmap: Roadmap) -> Result<(), RoadmapError>;

    /// Snapshot of a stored roadmap.
    fn get(&self, id: Uuid) -> Result<Roadmap, RoadmapError>;

    /// Set the `completed` flag of one milestone and report the roadmap's
    /// resulting progress. A failed call leaves the roadmap untouched.
    fn set_milestone_completed(
        &self,
        id: Uuid,
        index: i64,
        completed: bool,
    ) -> Result<MilestoneUpdate, RoadmapError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory [`RoadmapStore`].
///
/// The map lock is only held to insert or look up an entry. Each roadmap has
/// its own mutex, so updates to different roadmaps proceed independently and
/// updates to the same roadmap are serialized.
#[derive(Debug, Default)]
pub struct MemoryStore {
    roadmaps: RwLock<HashMap<Uuid, Arc<Mutex<Roadmap>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, id: Uuid) -> Result<Arc<Mutex<Roadmap>>, RoadmapError> {
        let roadmaps = self.roadmaps.read().expect("roadmap store lock poisoned");
        roadmaps.get(&id).cloned().ok_or(RoadmapError::NotFound(id))
    }
}

impl RoadmapStore for MemoryStore {
    fn create(&self, roadmap: Roadmap) -> Result<(), RoadmapError> {
        let mut roadmaps = self.roadmaps.write().expect("roadmap store lock poisoned");
        if roadmaps.contains_key(&roadmap.id) {
            return Err(RoadmapError::Conflict(roadmap.id));
        }
        roadmaps.insert(roadmap.id, Arc::new(Mutex::new(roadmap)));
        Ok(())
    }

    fn get(&self, id: Uuid) -> Result<Roadmap, RoadmapError> {
        let entry = self.entry(id)?;
        let roadmap = entry.lock().expect("roadmap lock poisoned");
        Ok(roadmap.clone())
    }

    fn set_milestone_completed(
        &self,
        id: Uuid,
        index: i64,
        completed: bool,
    ) -> Result<MilestoneUpdate, RoadmapError> {
        let entry = self.entry(id)?;
        let mut roadmap = entry.lock().expect("roadmap lock poisoned");

        let len = roadmap.milestones.len();
        let slot = usize::try_from(index).map_err(|_| RoadmapError::NegativeIndex { index })?;
        let milestone = roadmap
            .milestones
            .get_mut(slot)
            .ok_or(RoadmapError::IndexOutOfRange { index, len })?;
        milestone.completed = completed;
        let milestone = milestone.clone();

        tracing::debug!(
            roadmap_id = %id,
            index,
            completed,
            "Milestone updated"
        );

        Ok(MilestoneUpdate {
            milestone,
            all_completed: roadmap.all_completed(),
            progress: roadmap.progress(),
        })
    }

    fn len(&self) -> usize {
        self.roadmaps.read().expect("roadmap store lock poisoned").len()
    }
}
