use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::database::ActivityRegistry;
use crate::error::detail_response;
use crate::models::ActivityRecord;
use crate::services::activities_service;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(registry): State<Arc<ActivityRegistry>>,
) -> Json<IndexMap<String, ActivityRecord>> {
    Json(activities_service::list_activities(&registry))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => {
            debug!(activity = %activity_name, error = %rejection, "signup query rejected");
            return detail_response(rejection.status(), rejection.body_text());
        }
    };

    match activities_service::signup_for_activity(&registry, &activity_name, &query.email) {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => e.into_response(),
    }
}
