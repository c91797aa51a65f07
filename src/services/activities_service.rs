use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::database::ActivityRegistry;
use crate::error::SignupError;
use crate::models::ActivityRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupConfirmation {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> IndexMap<String, ActivityRecord> {
    registry.snapshot()
}

pub fn signup_for_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    match registry.signup(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(SignupConfirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            debug!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}
