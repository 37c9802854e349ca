//! Plan persistence boundary.
//!
//! The remote sync layer is external to this crate; what the engine needs
//! is a key-value-blob shaped store for the whole plan with load/save and
//! change notification. [`MemoryPlanStore`] backs tests and the in-process
//! session; [`JsonFileStore`] persists the wire format
//! (`{"ground": Floor, "upper": Floor}`) to disk. Conflict arbitration
//! between concurrent editors is the remote layer's problem, not ours.

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use renoplan_core::types::{DataCallback, SubscriptionId};
use renoplan_core::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::model::FloorPlan;

/// Callback invoked with the plan after every successful save.
pub type PlanCallback = DataCallback<FloorPlan>;

/// The blob-store boundary for the whole floor plan.
pub trait PlanStore: Send + Sync {
    /// Loads the persisted plan, if any.
    fn load(&self) -> Result<Option<FloorPlan>>;

    /// Persists the plan. Last write wins.
    fn save(&self, plan: &FloorPlan) -> Result<()>;

    /// Registers a callback to run after each successful save.
    fn subscribe(&self, callback: PlanCallback) -> SubscriptionId;
}

/// In-memory plan store with save notifications.
#[derive(Default)]
pub struct MemoryPlanStore {
    plan: RwLock<Option<FloorPlan>>,
    subscribers: Mutex<Vec<(SubscriptionId, PlanCallback)>>,
    next_id: Mutex<SubscriptionId>,
    saved_at: Mutex<Option<DateTime<Utc>>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the plan was last saved, if ever.
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        *self.saved_at.lock()
    }

    fn notify(&self, plan: &FloorPlan) {
        let subscribers = self.subscribers.lock();
        for (_, callback) in subscribers.iter() {
            callback(plan);
        }
    }
}

impl PlanStore for MemoryPlanStore {
    fn load(&self) -> Result<Option<FloorPlan>> {
        Ok(self.plan.read().clone())
    }

    fn save(&self, plan: &FloorPlan) -> Result<()> {
        *self.plan.write() = Some(plan.clone());
        *self.saved_at.lock() = Some(Utc::now());
        debug!("plan saved to memory store");
        self.notify(plan);
        Ok(())
    }

    fn subscribe(&self, callback: PlanCallback) -> SubscriptionId {
        let mut next = self.next_id.lock();
        let id = *next;
        *next += 1;
        self.subscribers.lock().push((id, callback));
        id
    }
}

/// File-backed plan store using the JSON wire format.
pub struct JsonFileStore {
    path: PathBuf,
    subscribers: Mutex<Vec<(SubscriptionId, PlanCallback)>>,
    next_id: Mutex<SubscriptionId>,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            subscribers: Mutex::new(Vec::new()),
            next_id: Mutex::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanStore for JsonFileStore {
    fn load(&self) -> Result<Option<FloorPlan>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let plan = FloorPlan::from_json(&json)?;
        info!(path = %self.path.display(), "plan loaded");
        Ok(Some(plan))
    }

    fn save(&self, plan: &FloorPlan) -> Result<()> {
        let json = plan.to_json()?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), "plan saved");
        let subscribers = self.subscribers.lock();
        for (_, callback) in subscribers.iter() {
            callback(plan);
        }
        Ok(())
    }

    fn subscribe(&self, callback: PlanCallback) -> SubscriptionId {
        let mut next = self.next_id.lock();
        let id = *next;
        *next += 1;
        self.subscribers.lock().push((id, callback));
        id
    }
}
