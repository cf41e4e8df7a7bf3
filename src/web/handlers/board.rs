//! Public board handlers for Web API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::board::PostField;
use crate::web::dto::{
    ApiResponse, BoardPostsResponse, CreatePostRequest, LikeResponse, ListQuery,
    PaginatedResponse, PostListResponse, PostResponse, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/boards/:url/posts - List posts of a board.
pub async fn list_board_posts(
    State(state): State<Arc<AppState>>,
    Path(board_url): Path<String>,
    Query(params): Query<ListQuery>,
) -> Result<Json<BoardPostsResponse>, ApiError> {
    let query = params.to_table_query::<PostField>()?;

    let catalog = state.catalog.lock().await;
    let page = catalog
        .list_board_posts(&board_url, &query)?
        .map(PostListResponse::from);
    let posts = PaginatedResponse::from_page(page, catalog.views().page_window);

    Ok(Json(BoardPostsResponse::new(&board_url, posts)))
}

/// POST /api/boards/:url/posts - Write a post.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Path(board_url): Path<String>,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponse>>), ApiError> {
    let post = {
        let mut catalog = state.catalog.lock().await;
        catalog.create_post(&board_url, req.into())?
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(PostResponse::from(&post))),
    ))
}

/// GET /api/posts/:id - Get a post.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<PostResponse>>, ApiError> {
    let catalog = state.catalog.lock().await;
    let post = catalog.post(post_id)?;

    Ok(Json(ApiResponse::new(PostResponse::from(post))))
}

/// POST /api/posts/:id/like - Toggle the like flag of a post.
pub async fn toggle_like(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<ApiResponse<LikeResponse>>, ApiError> {
    let mut catalog = state.catalog.lock().await;
    let post = catalog.toggle_like(post_id)?;

    Ok(Json(ApiResponse::new(LikeResponse {
        id: post.id,
        likes: post.likes,
        is_liked: post.is_liked,
    })))
}
