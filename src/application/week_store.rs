//! The week collection and its CRUD operations
//!
//! The whole collection lives in memory and is written back to storage in
//! full after each mutation. Reads hand out shared borrows only, so every
//! change goes through one of the mutating methods and gets persisted.

use crate::domain::{IdGenerator, Week, WeekPatch};
use crate::error::Result;
use crate::infrastructure::{FileStorage, KeyValueStorage, PondRepository, Workspace};
use log::{debug, info};

/// Storage key holding the serialized collection
pub const WEEKS_KEY: &str = "wordypond-weeks";

/// Store backed by a workspace's data directory
pub type WorkspaceWeekStore = WeekStore<FileStorage, Box<dyn IdGenerator>>;

/// Open the week store of `workspace`, using its configured id strategy
pub fn open_workspace_store(workspace: &Workspace) -> Result<WorkspaceWeekStore> {
    let config = workspace.load_config()?;
    debug!(
        "opening weeks in {} with {} ids",
        workspace.data_dir().display(),
        config.id_strategy.as_str()
    );
    WeekStore::open(workspace.storage(), config.id_strategy.generator())
}

/// Owns the week collection and keeps storage in sync with it
#[derive(Debug)]
pub struct WeekStore<S, G> {
    storage: S,
    ids: G,
    weeks: Vec<Week>,
}

impl<S: KeyValueStorage, G: IdGenerator> WeekStore<S, G> {
    /// Load the collection from `storage`, starting empty if nothing is stored
    pub fn open(storage: S, mut ids: G) -> Result<Self> {
        let weeks: Vec<Week> = storage.load(WEEKS_KEY)?;
        for week in &weeks {
            ids.observe(&week.id);
        }
        debug!("opened week store with {} weeks", weeks.len());

        Ok(WeekStore {
            storage,
            ids,
            weeks,
        })
    }

    /// All weeks in insertion order
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Append a new week and persist. Returns the created record.
    pub fn add_week<I, W>(&mut self, title: impl Into<String>, words: I) -> Result<Week>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let week = Week::new(
            self.ids.next_id(),
            title.into(),
            words.into_iter().map(Into::into).collect(),
        );

        let mut weeks = self.weeks.clone();
        weeks.push(week.clone());
        self.replace(weeks)?;

        info!("added week {} ({} words)", week.id, week.words.len());
        Ok(week)
    }

    /// First week whose id equals `id`
    pub fn get_week(&self, id: &str) -> Option<&Week> {
        self.weeks.iter().find(|week| week.id == id)
    }

    /// Overlay `patch` onto the week with `id` and persist.
    ///
    /// Returns `false` without touching storage when no week matches.
    pub fn update_week(&mut self, id: &str, patch: WeekPatch) -> Result<bool> {
        let Some(index) = self.weeks.iter().position(|week| week.id == id) else {
            debug!("update skipped, no week {}", id);
            return Ok(false);
        };

        let mut weeks = self.weeks.clone();
        weeks[index] = patch.apply_to(&weeks[index]);
        self.replace(weeks)?;

        info!("updated week {}", id);
        Ok(true)
    }

    /// Remove the week with `id` and persist, even if nothing was removed.
    ///
    /// Returns whether a week was removed.
    pub fn delete_week(&mut self, id: &str) -> Result<bool> {
        let weeks: Vec<Week> = self
            .weeks
            .iter()
            .filter(|week| week.id != id)
            .cloned()
            .collect();
        let removed = weeks.len() < self.weeks.len();
        self.replace(weeks)?;

        if removed {
            info!("deleted week {}", id);
        } else {
            debug!("delete found no week {}", id);
        }
        Ok(removed)
    }

    /// Give back the storage collaborator
    pub fn into_storage(self) -> S {
        self.storage
    }

    // Persist first so a failed write leaves memory matching storage
    fn replace(&mut self, weeks: Vec<Week>) -> Result<()> {
        self.storage.store(WEEKS_KEY, &weeks)?;
        self.weeks = weeks;
        Ok(())
    }
}
