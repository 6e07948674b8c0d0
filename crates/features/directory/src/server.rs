//! HTTP boundary of the directory slice: handlers, the admin guard, and the
//! mapping from store errors to response codes.

// Handlers must be async for axum even though the store is synchronous.
#![allow(clippy::unused_async)]

use crate::Directory;
use crate::access::authorize;
use crate::error::{AccessError, DirectoryError};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use roster_domain::constants::USERS_TAG;
use roster_domain::user::{Role, User};
use roster_kernel::prelude::ApiState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// A user record as it appears in requests and responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
struct UserBody {
    /// Unique identifier of the user
    email: String,
    /// Role name; one of `admin` or `guest`
    role: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self { email: user.email, role: user.role }
    }
}

impl From<UserBody> for User {
    fn from(body: UserBody) -> Self {
        Self { email: body.email, role: body.role }
    }
}

/// Error payload; every non-2xx response carries one.
#[derive(Debug, Serialize, ToSchema)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

fn store_error_response(err: &DirectoryError) -> Response {
    let status = match err {
        DirectoryError::NotValid(_) => StatusCode::BAD_REQUEST,
        DirectoryError::AlreadyExists => StatusCode::CONFLICT,
        DirectoryError::NotFound => StatusCode::NOT_FOUND,
    };
    error_response(status, err.to_string())
}

/// Builds the slice router. The mutating routes require [`RequireAdmin`].
pub fn directory_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_users, add_user, update_user))
        .routes(routes!(delete_user))
}

/// Extractor guarding admin-only routes.
///
/// The `Authorization` header carries the caller's identity digest. A missing
/// header or an unresolvable digest rejects with 401; a resolvable digest
/// whose role is not admin rejects with 403. The two cases stay distinct on
/// purpose: they mirror the [`AccessError`] variants.
#[derive(Debug)]
struct RequireAdmin;

impl FromRequestParts<ApiState> for RequireAdmin {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        let directory = state
            .try_get_slice::<Directory>()
            .map_err(|err| error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                error_response(StatusCode::UNAUTHORIZED, "missing authorization token")
            })?;

        match authorize(directory.store(), token, &[Role::Admin]) {
            Ok(_) => Ok(Self),
            Err(err @ AccessError::UnknownIdentity) => {
                Err(error_response(StatusCode::UNAUTHORIZED, err.to_string()))
            },
            Err(err @ AccessError::InsufficientRole) => {
                Err(error_response(StatusCode::FORBIDDEN, err.to_string()))
            },
        }
    }
}

#[utoipa::path(
    get,
    path = "/users",
    responses((status = OK, description = "Every user in the directory", body = [UserBody])),
    tag = USERS_TAG,
)]
async fn list_users(State(state): State<ApiState>) -> Response {
    match state.try_get_slice::<Directory>() {
        Ok(directory) => {
            let users: Vec<UserBody> =
                directory.store().list().into_iter().map(UserBody::from).collect();
            Json(users).into_response()
        },
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserBody,
    responses(
        (status = CREATED, description = "User added"),
        (status = BAD_REQUEST, description = "Invalid user record", body = ErrorBody),
        (status = UNAUTHORIZED, description = "Missing or unknown identity digest", body = ErrorBody),
        (status = FORBIDDEN, description = "Caller is not an admin", body = ErrorBody),
        (status = CONFLICT, description = "Email already in use", body = ErrorBody),
    ),
    security(("identity_digest" = [])),
    tag = USERS_TAG,
)]
async fn add_user(
    State(state): State<ApiState>,
    _admin: RequireAdmin,
    payload: Result<Json<UserBody>, JsonRejection>,
) -> Response {
    let directory = match state.try_get_slice::<Directory>() {
        Ok(directory) => directory,
        Err(err) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match directory.store().add(&body.into()) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(err) => store_error_response(&err),
    }
}

#[utoipa::path(
    patch,
    path = "/users",
    request_body = UserBody,
    responses(
        (status = OK, description = "User updated"),
        (status = BAD_REQUEST, description = "Invalid user record", body = ErrorBody),
        (status = UNAUTHORIZED, description = "Missing or unknown identity digest", body = ErrorBody),
        (status = FORBIDDEN, description = "Caller is not an admin", body = ErrorBody),
        (status = NOT_FOUND, description = "No user with that email", body = ErrorBody),
    ),
    security(("identity_digest" = [])),
    tag = USERS_TAG,
)]
async fn update_user(
    State(state): State<ApiState>,
    _admin: RequireAdmin,
    payload: Result<Json<UserBody>, JsonRejection>,
) -> Response {
    let directory = match state.try_get_slice::<Directory>() {
        Ok(directory) => directory,
        Err(err) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match directory.store().update(&body.into()) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => store_error_response(&err),
    }
}

#[utoipa::path(
    delete,
    path = "/users/{email}",
    params(("email" = String, Path, description = "Email of the user to remove")),
    responses(
        (status = OK, description = "User removed"),
        (status = UNAUTHORIZED, description = "Missing or unknown identity digest", body = ErrorBody),
        (status = FORBIDDEN, description = "Caller is not an admin", body = ErrorBody),
        (status = NOT_FOUND, description = "No user with that email", body = ErrorBody),
    ),
    security(("identity_digest" = [])),
    tag = USERS_TAG,
)]
async fn delete_user(
    State(state): State<ApiState>,
    _admin: RequireAdmin,
    Path(email): Path<String>,
) -> Response {
    let directory = match state.try_get_slice::<Directory>() {
        Ok(directory) => directory,
        Err(err) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };

    match directory.store().delete(&email) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => store_error_response(&err),
    }
}
