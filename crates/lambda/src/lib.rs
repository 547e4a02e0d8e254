//! Lambda entry point shared by the stash services.
//!
//! `lambda_http` can drive an axum `Router` directly, but two of its defaults
//! do not suit these services:
//!
//! - REST API (v1) events carry the stage name in front of the resource path
//!   (`/prod/items/t1`), so no route would match.
//! - Responses with a `text/*` content type are decoded with their charset,
//!   which replaces invalid UTF-8 sequences in binary objects.
//!
//! [`handle`] removes the stage prefix before routing and builds the Lambda
//! body itself: text when the bytes are valid UTF-8, base64 binary otherwise.

use axum::Router;
use http_body_util::BodyExt;
use lambda_http::{
    http::uri::{PathAndQuery, Uri},
    request::RequestContext,
    Body, Error, Request, RequestExt, Response,
};
use tower::ServiceExt;

/// Serve `app` for every invocation until the Lambda runtime shuts down.
pub async fn run(app: Router) -> Result<(), Error> {
    lambda_http::run(lambda_http::service_fn(move |request: Request| {
        let app = app.clone();
        async move { handle(app, request).await }
    }))
    .await
}

/// Route a single Lambda request through `app`.
pub async fn handle(app: Router, request: Request) -> Result<Response<Body>, Error> {
    let request = strip_stage(request);
    let response = app.oneshot(request).await?;
    into_lambda_response(response).await
}

/// Remove the API Gateway stage segment from the request path, if present.
pub fn strip_stage(mut request: Request) -> Request {
    if let Some(uri) = unstaged_uri(&request) {
        tracing::debug!(from = %request.uri().path(), to = %uri.path(), "Removed stage from path");
        *request.uri_mut() = uri;
    }
    request
}

fn unstaged_uri(request: &Request) -> Option<Uri> {
    let Some(RequestContext::ApiGatewayV1(context)) = request.request_context_ref() else {
        return None;
    };
    let stage = context.stage.as_deref()?;
    let rest = request.uri().path().strip_prefix('/')?.strip_prefix(stage)?;
    let path = match rest {
        "" => "/",
        rest if rest.starts_with('/') => rest,
        _ => return None,
    };

    let path_and_query = match request.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = request.uri().clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

/// Buffer an axum response into a Lambda response.
///
/// Headers and status are kept as they are.
pub async fn into_lambda_response(
    response: axum::response::Response,
) -> Result<Response<Body>, Error> {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await?.to_bytes();
    Ok(Response::from_parts(parts, body_from_bytes(bytes.to_vec())))
}

fn body_from_bytes(bytes: Vec<u8>) -> Body {
    if bytes.is_empty() {
        return Body::Empty;
    }
    match String::from_utf8(bytes) {
        Ok(text) => Body::Text(text),
        Err(err) => Body::Binary(err.into_bytes()),
    }
}
