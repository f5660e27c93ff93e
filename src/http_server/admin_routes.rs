//! Row Management HTTP Routes
//!
//! Insert, partial update and delete for athlete and region rows.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{delete, patch, post},
    Json, Router,
};
use serde::Serialize;

use crate::model::{Athlete, AthleteUpdate, NewAthlete, Region, RegionUpdate};
use crate::observability::{Event, Logger};

use super::errors::ApiResult;
use super::state::AppState;

/// Body of a successful delete: `{"Deleted": true}`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    #[serde(rename = "Deleted")]
    pub deleted: bool,
}

impl DeleteResponse {
    fn done() -> Json<Self> {
        Json(Self { deleted: true })
    }
}

/// Create row management routes
pub fn admin_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/add_athlete/", post(add_athlete_handler))
        .route("/add_athlete", post(add_athlete_handler))
        .route("/update_athlete/:id", patch(update_athlete_handler))
        .route("/update_athlete/:id/", patch(update_athlete_handler))
        .route("/delete_athlete/:id", delete(delete_athlete_handler))
        .route("/delete_athlete/:id/", delete(delete_athlete_handler))
        .route("/add_region/", post(add_region_handler))
        .route("/add_region", post(add_region_handler))
        .route("/update_region/:noc", patch(update_region_handler))
        .route("/update_region/:noc/", patch(update_region_handler))
        .route("/delete_region/:noc", delete(delete_region_handler))
        .route("/delete_region/:noc/", delete(delete_region_handler))
        .with_state(state)
}

fn log_write(event: Event, table: &str, key: &str) {
    Logger::info(event, &[("key", key), ("table", table)]);
}

// ==================
// Athlete Handlers
// ==================

async fn add_athlete_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewAthlete>, JsonRejection>,
) -> ApiResult<Json<Athlete>> {
    let Json(athlete) = payload?;
    let athlete = state.store.insert_athlete(athlete)?;
    log_write(Event::RowInserted, &athlete.season.to_lowercase(), &athlete.id.to_string());
    Ok(Json(athlete))
}

async fn update_athlete_handler(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AthleteUpdate>, JsonRejection>,
) -> ApiResult<Json<Athlete>> {
    let Path(id) = id?;
    let Json(update) = payload?;
    let athlete = state.store.update_athlete(id, update)?;
    log_write(Event::RowUpdated, &athlete.season.to_lowercase(), &id.to_string());
    Ok(Json(athlete))
}

async fn delete_athlete_handler(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;
    state.store.delete_athlete(id)?;
    log_write(Event::RowDeleted, "athletes", &id.to_string());
    Ok(DeleteResponse::done())
}

// ==================
// Region Handlers
// ==================

async fn add_region_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Region>, JsonRejection>,
) -> ApiResult<Json<Region>> {
    let Json(region) = payload?;
    let region = state.store.insert_region(region)?;
    log_write(Event::RowInserted, "regions", &region.noc);
    Ok(Json(region))
}

async fn update_region_handler(
    State(state): State<Arc<AppState>>,
    Path(noc): Path<String>,
    payload: Result<Json<RegionUpdate>, JsonRejection>,
) -> ApiResult<Json<Region>> {
    let Json(update) = payload?;
    let region = state.store.update_region(&noc, update)?;
    log_write(Event::RowUpdated, "regions", &region.noc);
    Ok(Json(region))
}

async fn delete_region_handler(
    State(state): State<Arc<AppState>>,
    Path(noc): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    state.store.delete_region(&noc)?;
    log_write(Event::RowDeleted, "regions", &noc);
    Ok(DeleteResponse::done())
}
