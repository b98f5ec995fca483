//! HTTP Basic authentication for recipe routes.
//!
//! [`ActingUser`] resolves the caller before a handler runs. With
//! authentication disabled it always yields [`Actor::Anonymous`]; otherwise
//! it decodes the `Authorization: Basic` header and asks the
//! [`LoginService`](crate::domain::ports::LoginService) for a user id.

use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::{Actor, Error, LoginCredentials};

use super::state::HttpState;

const BASIC_SCHEME: &str = "basic";

/// Decode an `Authorization` header value into login credentials.
///
/// # Examples
/// ```
/// use recipes_backend::inbound::http::auth::parse_basic_credentials;
///
/// // "cook@example.com:password1"
/// let creds = parse_basic_credentials("Basic Y29va0BleGFtcGxlLmNvbTpwYXNzd29yZDE=")
///     .expect("well-formed header");
/// assert_eq!(creds.email(), "cook@example.com");
/// ```
pub fn parse_basic_credentials(value: &str) -> Result<LoginCredentials, Error> {
    let malformed = || Error::unauthorized("malformed basic credentials");

    let (scheme, encoded) = value.trim().split_once(' ').ok_or_else(malformed)?;
    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
        return Err(malformed());
    }
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| malformed())?;
    let decoded = String::from_utf8(decoded).map_err(|_| malformed())?;
    let (email, password) = decoded.split_once(':').ok_or_else(malformed)?;
    LoginCredentials::try_from_parts(email, password).map_err(|_| malformed())
}

/// Authenticated caller extracted from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser(pub Actor);

impl ActingUser {
    pub fn into_actor(self) -> Actor {
        self.0
    }
}

impl FromRequest for ActingUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let authorization = req
            .headers()
            .get(header::AUTHORIZATION)
            .map(|value| value.to_str().map(str::to_owned));

        Box::pin(async move {
            let state =
                state.ok_or_else(|| Error::internal("HTTP state is not configured"))?;
            if !state.auth_enabled {
                return Ok(Self(Actor::Anonymous));
            }
            let raw = match authorization {
                None => return Err(Error::unauthorized("authentication required")),
                Some(Err(_)) => return Err(Error::unauthorized("malformed basic credentials")),
                Some(Ok(raw)) => raw,
            };
            let credentials = parse_basic_credentials(&raw)?;
            let user_id = state
                .login
                .authenticate(&credentials)
                .await
                .inspect_err(|err| debug!(code = ?err.code(), "basic authentication rejected"))?;
            Ok(Self(Actor::User(user_id)))
        })
    }
}
