use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::database::seed;
use crate::error::SignupError;
use crate::models::ActivityRecord;

/// In-memory activity database, keyed by activity name.
///
/// Lives for the process lifetime and is never persisted. Only rosters are
/// mutated, and only by [`ActivityRegistry::signup`], which holds the write
/// lock across the membership check and the append so two concurrent
/// signups for the same email cannot both succeed.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: RwLock<IndexMap<String, ActivityRecord>>,
}

impl ActivityRegistry {
    pub fn new(activities: IndexMap<String, ActivityRecord>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Fresh registry holding the nine catalog activities.
    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn snapshot(&self) -> IndexMap<String, ActivityRecord> {
        self.activities.read().clone()
    }

    pub fn get(&self, activity_name: &str) -> Option<ActivityRecord> {
        self.activities.read().get(activity_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Appends `email` to the roster of `activity_name`.
    ///
    /// `max_participants` is not checked.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::NotFound)?;

        if activity.has_participant(email) {
            return Err(SignupError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }
}
