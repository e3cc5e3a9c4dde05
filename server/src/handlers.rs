//! Request handlers for the problem endpoints.
//!
//! Each handler translates one HTTP verb into calls on the shared
//! `ProblemsService` and converts between `ProblemModel` and `Problem` at the
//! edge. PUT and DELETE hold the write lock across the existence check and
//! the mutation.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use problems_core::{to_models, validate_problem, ProblemModel};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, ErrorBody};
use crate::Db;

pub const PROBLEMS_PATH: &str = "/api/problems";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Health {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Accepted for compatibility; test sets are never expanded.
    #[serde(default)]
    pub expand_test_sets: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = Health))
)]
pub async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        message: "problems API is alive".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/problems",
    tag = "problems",
    params(ListQuery),
    responses((status = 200, description = "All stored problems", body = Vec<ProblemModel>))
)]
pub async fn list_problems(
    State(db): State<Db>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<ProblemModel>> {
    if query.expand_test_sets {
        debug!("expandTestSets requested but test sets are not expanded");
    }
    let problems = db.read().await;
    Json(to_models(problems.get_all()))
}

#[utoipa::path(
    get,
    path = "/api/problems/{id}",
    tag = "problems",
    params(("id" = String, Path, description = "Problem id")),
    responses(
        (status = 200, description = "The requested problem", body = ProblemModel),
        (status = 404, description = "No problem with this id", body = ErrorBody)
    )
)]
pub async fn get_problem(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<ProblemModel>, AppError> {
    let problems = db.read().await;
    problems
        .get_by_id(&id)
        .map(|problem| Json(problem.to_model()))
        .ok_or_else(|| AppError::not_found(id))
}

#[utoipa::path(
    post,
    path = "/api/problems",
    tag = "problems",
    request_body = ProblemModel,
    responses(
        (status = 201, description = "Problem created", body = ProblemModel,
            headers(("Location" = String, description = "URI of the new problem"))),
        (status = 400, description = "Title or description missing", body = ErrorBody)
    )
)]
pub async fn create_problem(
    State(db): State<Db>,
    Json(mut model): Json<ProblemModel>,
) -> Result<impl IntoResponse, AppError> {
    validate_problem(&model)?;

    let id = db.write().await.create(model.to_entity()).id.clone();
    info!(%id, "created problem");

    let location = format!("{PROBLEMS_PATH}/{id}");
    model.id = Some(id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(model)))
}

#[utoipa::path(
    put,
    path = "/api/problems/{id}",
    tag = "problems",
    params(("id" = String, Path, description = "Problem id")),
    request_body = ProblemModel,
    responses(
        (status = 204, description = "Problem updated"),
        (status = 400, description = "Title or description missing", body = ErrorBody),
        (status = 404, description = "No problem with this id", body = ErrorBody)
    )
)]
pub async fn update_problem(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(mut model): Json<ProblemModel>,
) -> Result<StatusCode, AppError> {
    validate_problem(&model)?;

    let mut problems = db.write().await;
    let existing = problems
        .get_by_id(&id)
        .map(|problem| problem.id.clone())
        .ok_or_else(|| AppError::not_found(id))?;

    // The path id wins over whatever the body carries.
    model.id = Some(existing);
    problems.update(model.into());
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/problems/{id}",
    tag = "problems",
    params(("id" = String, Path, description = "Problem id")),
    responses(
        (status = 204, description = "Problem removed"),
        (status = 404, description = "No problem with this id", body = ErrorBody)
    )
)]
pub async fn delete_problem(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut problems = db.write().await;
    let problem = problems
        .get_by_id(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found(id))?;

    problems.remove(&problem);
    info!(id = %problem.id, "deleted problem");
    Ok(StatusCode::NO_CONTENT)
}
