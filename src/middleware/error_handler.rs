use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    Error, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use super::request_id::RequestId;

/// Middleware that logs failed requests with their request ID
pub struct ErrorLogger;

impl<S, B> Transform<S, ServiceRequest> for ErrorLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorLoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorLoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_default();
        let path = req.path().to_string();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Err(err) => {
                    tracing::error!(request_id = %request_id, path = %path, "Request error: {:?}", err);
                }
                Ok(res) if res.status().is_server_error() => {
                    tracing::error!(request_id = %request_id, path = %path, status = %res.status(), "Request failed");
                }
                Ok(res) if res.status().is_client_error() => {
                    tracing::warn!(request_id = %request_id, path = %path, status = %res.status(), "Request rejected");
                }
                Ok(_) => {}
            }

            result
        })
    }
}

fn error_body(status: u16, message: String) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": status,
            "message": message,
        }
    })
}

/// Render malformed JSON bodies in the same shape as `AppError`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let message = format!("Validation error: {}", err);
    let response = HttpResponse::BadRequest().json(error_body(400, message));
    InternalError::from_response(err, response).into()
}

/// Render malformed query strings in the same shape as `AppError`
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let message = format!("Validation error: {}", err);
    let response = HttpResponse::BadRequest().json(error_body(400, message));
    InternalError::from_response(err, response).into()
}
