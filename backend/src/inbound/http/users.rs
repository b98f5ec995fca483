//! Account registration handler.
//!
//! ```text
//! POST {register_path} {"email":"cook@example.com","password":"password1"}
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserRegistration;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Registration request body.
///
/// `active` and `role` are accepted for compatibility but the server always
/// registers an active standard account.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[schema(example = "cook@example.com")]
    pub email: Option<String>,
    #[schema(example = "password1")]
    pub password: Option<String>,
    pub active: Option<bool>,
    pub role: Option<String>,
}

impl From<RegisterRequest> for UserRegistration {
    fn from(value: RegisterRequest) -> Self {
        let mut registration = UserRegistration::new(
            value.email.unwrap_or_default(),
            value.password.unwrap_or_default(),
        );
        registration.active = value.active;
        registration.role = value.role;
        registration
    }
}

/// Register a new account. Always public.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account registered"),
        (status = 400, description = "Invalid or duplicate account", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    state.users.register(payload.into_inner().into()).await?;
    Ok(HttpResponse::Ok().finish())
}
