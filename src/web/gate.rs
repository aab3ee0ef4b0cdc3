//! Shared-secret access gate. One global username/password pair protects
//! the whole site; this is not per-user auth and keeps no session state,
//! every request is re-checked.

use actix_web::body::EitherBody;
use actix_web::http::header;
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use futures_util::future::{ok, Ready};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Paths served without a credential: build assets and crawler files.
const EXEMPT_PREFIXES: [&str; 2] = ["/pkg/", "/static/"];
const EXEMPT_PATHS: [&str; 3] = ["/favicon.ico", "/robots.txt", "/sitemap.xml"];

/// The configured shared secret. When either half is missing no
/// credential can ever match, so the gate rejects everything.
#[derive(Clone, Default)]
pub struct GateConfig {
    user: Option<String>,
    pass: Option<String>,
}

impl GateConfig {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            pass: Some(pass.into()),
        }
    }

    pub fn from_env() -> Self {
        Self {
            user: std::env::var("BASIC_AUTH_USER").ok(),
            pass: std::env::var("BASIC_AUTH_PASS").ok(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.user.is_some() && self.pass.is_some()
    }
}

pub fn is_exempt(path: &str) -> bool {
    EXEMPT_PATHS.contains(&path) || EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Decides allow/challenge from the raw Authorization header value. Every
/// failure shape (missing header, wrong scheme, bad base64, mismatched
/// credential) is treated identically.
pub fn authorize(header: Option<&str>, config: &GateConfig) -> bool {
    let (Some(user), Some(pass)) = (config.user.as_deref(), config.pass.as_deref()) else {
        return false;
    };
    let Some(header) = header else {
        return false;
    };
    let mut parts = header.splitn(2, ' ');
    let (scheme, encoded) = (parts.next().unwrap_or(""), parts.next().unwrap_or(""));
    if scheme != "Basic" || encoded.is_empty() {
        return false;
    }
    let Ok(decoded) = BASE64.decode(encoded) else {
        return false;
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        return false;
    };
    match decoded.split_once(':') {
        Some((u, p)) => u == user && p == pass,
        None => false,
    }
}

fn challenge() -> HttpResponse {
    HttpResponse::Unauthorized()
        .insert_header((header::WWW_AUTHENTICATE, "Basic realm=\"Protected\""))
        .body("Auth required.")
}

/// Basic Auth middleware wrapping every route.
pub struct AccessGate {
    config: GateConfig,
}

impl AccessGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessGateMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AccessGateMiddleware {
            service,
            config: self.config.clone(),
        })
    }
}

pub struct AccessGateMiddleware<S> {
    service: S,
    config: GateConfig,
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let header_value = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        if is_exempt(req.path()) || authorize(header_value.as_deref(), &self.config) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let (req, _payload) = req.into_parts();
        let res = challenge().map_into_right_body();
        Box::pin(async move { Ok(ServiceResponse::new(req, res)) })
    }
}
