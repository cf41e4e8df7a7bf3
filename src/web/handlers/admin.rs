//! Admin handlers for Web API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::board::{BoardField, PostField};
use crate::user::{UserField, UserUpdate};
use crate::web::dto::{
    ApiResponse, BoardResponse, CreateBoardRequest, ListQuery, PaginatedResponse,
    PostListResponse, UpdateUserRequest, UserResponse, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

// ============================================================================
// Board Management
// ============================================================================

/// GET /api/admin/boards - List boards.
pub async fn list_admin_boards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<PaginatedResponse<BoardResponse>>, ApiError> {
    let query = params.to_table_query::<BoardField>()?;

    let catalog = state.catalog.lock().await;
    let page = catalog.list_admin_boards(&query).map(BoardResponse::from);

    Ok(Json(PaginatedResponse::from_page(
        page,
        catalog.views().page_window,
    )))
}

/// POST /api/admin/boards - Create a board.
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateBoardRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BoardResponse>>), ApiError> {
    let board = {
        let mut catalog = state.catalog.lock().await;
        catalog.create_board(req.into_new_board())?
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(BoardResponse::from(&board))),
    ))
}

/// DELETE /api/admin/boards/:id - Delete a board.
pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    Path(board_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut catalog = state.catalog.lock().await;
    catalog.delete_board(board_id)?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Post Management
// ============================================================================

/// GET /api/admin/posts - List posts of every board.
pub async fn list_admin_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<PaginatedResponse<PostListResponse>>, ApiError> {
    let query = params.to_table_query::<PostField>()?;

    let catalog = state.catalog.lock().await;
    let page = catalog.list_admin_posts(&query).map(PostListResponse::from);

    Ok(Json(PaginatedResponse::from_page(
        page,
        catalog.views().page_window,
    )))
}

// ============================================================================
// User Management
// ============================================================================

/// GET /api/admin/users - List users.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<PaginatedResponse<UserResponse>>, ApiError> {
    let query = params.to_table_query::<UserField>()?;

    let catalog = state.catalog.lock().await;
    let page = catalog.list_users(&query).map(UserResponse::from);

    Ok(Json(PaginatedResponse::from_page(
        page,
        catalog.views().page_window,
    )))
}

/// GET /api/admin/users/:id - Get user details.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let catalog = state.catalog.lock().await;
    let user = catalog.user(user_id)?;

    Ok(Json(ApiResponse::new(UserResponse::from(user))))
}

/// PATCH /api/admin/users/:id - Edit a user.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let update = UserUpdate::from(req);
    if update.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }

    let mut catalog = state.catalog.lock().await;
    let user = catalog.update_user(user_id, &update)?;

    Ok(Json(ApiResponse::new(UserResponse::from(user))))
}
