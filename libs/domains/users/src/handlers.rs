//! User HTTP Handlers - Axum route handlers
//!
//! Two routers are exposed: [`auth_router`] for the public signup/login
//! endpoints and [`router`] for user management. All successful
//! responses use 200 OK, including creation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::errors::responses::{
    BadRequestResponse, InternalServerErrorResponse, UnauthorizedResponse,
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, LoginRequest, Role, UpdateUser, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Message-wrapped user payload returned by signup and login.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Message-only payload returned by delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// OpenAPI documentation for the auth endpoints
#[derive(OpenApi)]
#[openapi(
    paths(signup, login),
    components(
        schemas(AuthResponse, CreateUser, LoginRequest, Role, UserResponse),
        responses(BadRequestResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags((name = "auth", description = "Signup and login"))
)]
pub struct AuthApiDoc;

/// OpenAPI documentation for the user management endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, list_regular_users, update_user, delete_user),
    components(
        schemas(CreateUser, UpdateUser, Role, UserResponse, MessageResponse),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags((name = "users", description = "User management"))
)]
pub struct UsersApiDoc;

/// Router for the auth endpoints, mounted under /api/auth.
pub fn auth_router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/signup", post(signup::<R>))
        .route("/login", post(login::<R>))
        .with_state(Arc::new(service))
}

/// Router for the user management endpoints, mounted under /api/users.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/", get(list_users::<R>).post(create_user::<R>))
        .route("/role/user", get(list_regular_users::<R>))
        .route("/{id}", put(update_user::<R>).delete(delete_user::<R>))
        .with_state(Arc::new(service))
}

// Ids arrive as raw path strings; a malformed id is reported as a
// store-level failure (500), not a client error.
fn parse_id(raw: &str) -> UserResult<Uuid> {
    raw.parse::<Uuid>()
        .map_err(|e| UserError::Database(format!("Cast to ObjectId failed for value \"{raw}\": {e}")))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/signup",
    request_body = CreateUser,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "auth"
)]
async fn signup<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Json(input): Json<CreateUser>,
) -> UserResult<Json<AuthResponse>> {
    let user = service.signup(input).await?;
    Ok(Json(AuthResponse {
        message: "Created".to_string(),
        user: user.into(),
    }))
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = AuthResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "auth"
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Json(input): Json<LoginRequest>,
) -> UserResult<Json<AuthResponse>> {
    let user = service.login(input).await?;
    Ok(Json(AuthResponse {
        message: "OK".to_string(),
        user: user.into(),
    }))
}

/// List all users
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.list_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Add a user (admin)
#[utoipa::path(
    post,
    path = "/",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User added", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Json(input): Json<CreateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = service.create_user(input).await?;
    Ok(Json(user.into()))
}

/// List users with the regular "user" role
#[utoipa::path(
    get,
    path = "/role/user",
    responses(
        (status = 200, description = "Regular users", body = Vec<UserResponse>),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn list_regular_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.list_users_by_role(Role::User).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated user, or null when the id is unknown", body = Option<UserResponse>),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    Json(input): Json<UpdateUser>,
) -> UserResult<Json<Option<UserResponse>>> {
    let id = parse_id(&id)?;
    let user = service.update_user(id, input).await?;
    Ok(Json(user.map(Into::into)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted (also for unknown ids)", body = MessageResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    tag = "users"
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    service.delete_user(id).await?;
    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}
