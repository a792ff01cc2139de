//! JWT Authentication middleware for protected routes.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::{debug, error};
use std::rc::Rc;

use crate::constants::{ERR_INVALID_AUTH_HEADER, ERR_INVALID_TOKEN, ERR_TOKEN_SERVICE_MISSING};
use crate::errors::{ApiError, RequestError};
use crate::models::{Claims, Meta};
use crate::services::TokenService;

/// JWT Authentication middleware.
///
/// Validates the bearer token from the Authorization header with the
/// `TokenService` registered as app data and adds the decoded claims to the
/// request extensions. Requests without a valid token are answered here with
/// an error envelope and never reach a handler.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authenticate(&req) {
                Ok(claims) => {
                    // Add claims to request extensions for use in handlers
                    req.extensions_mut().insert(claims);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => {
                    debug!("Rejected {} {}: {}", req.method(), req.path(), e);
                    let response =
                        RequestError::new(e, Meta::from_request(req.request())).error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

fn authenticate(req: &ServiceRequest) -> Result<Claims, ApiError> {
    let tokens = req.app_data::<web::Data<TokenService>>().ok_or_else(|| {
        error!("TokenService is not registered as app data");
        ApiError::InternalServerError(ERR_TOKEN_SERVICE_MISSING.to_string())
    })?;

    // Extract Authorization header
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized(ERR_INVALID_AUTH_HEADER.to_string()))?;

    tokens.verify(token).map_err(|e| {
        debug!("Token verification failed: {}", e);
        ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string())
    })
}
