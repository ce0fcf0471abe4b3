use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::account::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::session::use_cases::current::CurrentSessionUseCase;
use business::domain::session::use_cases::logout::LogoutUseCase;

use crate::api::auth::dto::{CurrentSessionResponse, LoginRequest, LoginResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    login_use_case: Arc<dyn LoginUseCase>,
    current_session_use_case: Arc<dyn CurrentSessionUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
}

impl AuthApi {
    pub fn new(
        login_use_case: Arc<dyn LoginUseCase>,
        current_session_use_case: Arc<dyn CurrentSessionUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
    ) -> Self {
        Self {
            login_use_case,
            current_session_use_case,
            logout_use_case,
        }
    }
}

/// Authentication API
///
/// Mock storefront auth: credentials are checked by plaintext equality
/// against the seeded account list, and the single active session lives
/// in the store.
#[OpenApi]
impl AuthApi {
    /// Sign in
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginApiResponse {
        let params = LoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(session) => LoginApiResponse::Ok(Json(LoginResponse {
                success: true,
                user: session.account.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginApiResponse::Unauthorized(json),
                    _ => LoginApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the active session
    #[oai(path = "/auth/session", method = "get", tag = "ApiTags::Auth")]
    async fn current_session(&self) -> CurrentSessionApiResponse {
        match self.current_session_use_case.execute().await {
            Ok(session) => CurrentSessionApiResponse::Ok(Json(session.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CurrentSessionApiResponse::InternalError(json)
            }
        }
    }

    /// Sign out
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Auth")]
    async fn logout(&self) -> LogoutApiResponse {
        match self.logout_use_case.execute().await {
            Ok(()) => LogoutApiResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                LogoutApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginApiResponse {
    #[oai(status = 200)]
    Ok(Json<LoginResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CurrentSessionApiResponse {
    #[oai(status = 200)]
    Ok(Json<CurrentSessionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutApiResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
