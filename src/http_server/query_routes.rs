//! Lookup HTTP Routes
//!
//! `/country/:country`, `/noc/:noc` and `/athletes/:athlete_name`, each
//! answering with an ordered object of group summaries.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::aggregate::Grouped;
use crate::observability::{Event, Logger};
use crate::service::{
    athlete_data, country_data, noc_data, AthleteParams, CountryParams, NocParams, ServiceError,
    ServiceResult,
};

use super::errors::{ApiError, ApiResult};
use super::state::AppState;

/// Create lookup routes
pub fn query_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/country/:country", get(country_handler))
        .route("/country/:country/", get(country_handler))
        .route("/noc/:noc", get(noc_handler))
        .route("/noc/:noc/", get(noc_handler))
        .route("/athletes/:athlete_name", get(athlete_handler))
        .route("/athletes/:athlete_name/", get(athlete_handler))
        .with_state(state)
}

/// Log the outcome of a lookup and convert it for the response
fn finish<K: Serialize>(
    route: &str,
    term: &str,
    result: ServiceResult<Grouped<K>>,
) -> ApiResult<Json<Grouped<K>>> {
    let request_id = Uuid::new_v4().to_string();

    match result {
        Ok(grouped) => {
            let entries = grouped.total_entries().to_string();
            let groups = grouped.len().to_string();
            Logger::info(
                Event::QueryComplete,
                &[
                    ("entries", entries.as_str()),
                    ("groups", groups.as_str()),
                    ("request_id", request_id.as_str()),
                    ("route", route),
                    ("term", term),
                ],
            );
            Ok(Json(grouped))
        }
        Err(err) => {
            let reason = err.to_string();
            let fields = [
                ("reason", reason.as_str()),
                ("request_id", request_id.as_str()),
                ("route", route),
                ("term", term),
            ];
            match err {
                ServiceError::Invalid(_) => Logger::warn(Event::QueryRejected, &fields),
                _ => Logger::error(Event::QueryRejected, &fields),
            }
            Err(err.into())
        }
    }
}

async fn country_handler(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
    params: Result<Query<CountryParams>, QueryRejection>,
) -> ApiResult<Json<Grouped<String>>> {
    let Query(params) = params.map_err(ApiError::from)?;
    finish(
        "country",
        &country,
        country_data(state.store.as_ref(), &country, &params),
    )
}

async fn noc_handler(
    State(state): State<Arc<AppState>>,
    Path(noc): Path<String>,
    params: Result<Query<NocParams>, QueryRejection>,
) -> ApiResult<Json<Grouped<i32>>> {
    let Query(params) = params.map_err(ApiError::from)?;
    finish("noc", &noc, noc_data(state.store.as_ref(), &noc, &params))
}

async fn athlete_handler(
    State(state): State<Arc<AppState>>,
    Path(athlete_name): Path<String>,
    params: Result<Query<AthleteParams>, QueryRejection>,
) -> ApiResult<Json<Grouped<String>>> {
    let Query(params) = params.map_err(ApiError::from)?;
    finish(
        "athletes",
        &athlete_name,
        athlete_data(state.store.as_ref(), &athlete_name, &params),
    )
}
