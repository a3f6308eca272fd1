//! Movie HTTP Routes
//!
//! CRUD endpoints over the movie store.
//!
//! | Method | Path     | Success             |
//! |--------|----------|---------------------|
//! | GET    | `/`      | 200, all movies     |
//! | POST   | `/`      | 201, created movie  |
//! | GET    | `/:id/`  | 200, movie          |
//! | PUT    | `/:id/`  | 200, replaced movie |
//! | DELETE | `/:id/`  | 204, empty body     |

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::observability::Event;
use crate::schema::{Movie, MovieDraft, MovieId, MovieValidator};
use crate::store::MovieStore;

use super::errors::{ApiError, ApiResult};
use super::state::MovieState;

type MovieBody = Result<Json<Value>, JsonRejection>;
type MoviePath = Result<Path<MovieId>, PathRejection>;

/// Create movie routes
pub fn movie_routes(state: Arc<MovieState>) -> Router {
    Router::new()
        .route("/", get(list_movies_handler).post(create_movie_handler))
        .route(
            "/:id/",
            get(get_movie_handler)
                .put(update_movie_handler)
                .delete(delete_movie_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn validate_body(store: &MovieStore, body: &Value) -> ApiResult<MovieDraft> {
    MovieValidator::new(store.genres())
        .validate(body)
        .map_err(|err| {
            info!(event = %Event::ValidationRejected, error = %err, "movie rejected");
            ApiError::from(err)
        })
}

// ==================
// Handlers
// ==================

async fn list_movies_handler(State(state): State<Arc<MovieState>>) -> Json<Vec<Movie>> {
    let store = state.store().await;
    Json(store.all())
}

async fn create_movie_handler(
    State(state): State<Arc<MovieState>>,
    body: MovieBody,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let Json(body) = body?;
    let mut store = state.store().await;

    let draft = validate_body(&store, &body)?;
    let id = store.next_id()?;
    let movie = draft.into_movie(id);
    store.put(id, movie.clone());

    info!(event = %Event::MovieCreated, id, name = %movie.name, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn get_movie_handler(
    State(state): State<Arc<MovieState>>,
    path: MoviePath,
) -> ApiResult<Json<Movie>> {
    let Path(id) = path?;
    let store = state.store().await;

    store.get(id).cloned().map(Json).ok_or_else(|| {
        debug!(id, "movie lookup missed");
        ApiError::NotFound
    })
}

async fn update_movie_handler(
    State(state): State<Arc<MovieState>>,
    path: MoviePath,
    body: MovieBody,
) -> ApiResult<Json<Movie>> {
    let Path(id) = path?;
    let mut store = state.store().await;

    if !store.contains(id) {
        return Err(ApiError::NotFound);
    }

    let Json(body) = body?;
    let draft = validate_body(&store, &body)?;
    let movie = draft.into_movie(id);
    store.put(id, movie.clone());

    info!(event = %Event::MovieUpdated, id, "movie updated");
    Ok(Json(movie))
}

async fn delete_movie_handler(
    State(state): State<Arc<MovieState>>,
    path: MoviePath,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let mut store = state.store().await;

    store.delete(id).ok_or(ApiError::NotFound)?;

    info!(event = %Event::MovieDeleted, id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
