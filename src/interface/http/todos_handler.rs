use axum::{
    Json,
    extract::{Form, Path, State},
    response::{Html, Redirect},
};
use serde::{Deserialize, Serialize};

use crate::{
    interface::http::{
        page::render_index,
        problem::{ApiProblem, ApiResult},
    },
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SubmitTodoRequest {
    #[serde(default)]
    pub todo: Option<String>,
}

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let todos = state
        .todo_service
        .list_todos()
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(Html(render_index(&todos)))
}

pub async fn submit_todo(
    State(state): State<AppState>,
    Form(request): Form<SubmitTodoRequest>,
) -> ApiResult<Redirect> {
    state
        .todo_service
        .add_todo(request.todo)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(Redirect::to("/"))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Redirect> {
    // Digits-only matching mirrors route-level integer converters: any other
    // segment never reaches the collection.
    let index = parse_todo_index(&id)
        .ok_or_else(|| ApiProblem::not_found(format!("no route for /delete/{id}")))?;

    state
        .todo_service
        .remove_todo(index)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(Redirect::to("/"))
}

fn parse_todo_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
