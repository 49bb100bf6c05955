// Routing system for HTTP requests

use crate::{Error, HttpMethod, HttpRequest, HttpResponse};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A route handler function type
pub type HandlerFn = Arc<
    dyn Fn(HttpRequest) -> Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>
        + Send
        + Sync,
>;

/// Turns a failed dispatch into the response the client sees
pub type ErrorHandlerFn =
    Arc<dyn Fn(Error) -> Pin<Box<dyn Future<Output = HttpResponse> + Send>> + Send + Sync>;

/// Wrap an async function as a [`HandlerFn`]
pub fn handler<F, Fut>(f: F) -> HandlerFn
where
    F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
{
    Arc::new(
        move |req: HttpRequest| -> Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>> {
            Box::pin(f(req))
        },
    )
}

/// Wrap an async function as an [`ErrorHandlerFn`]
pub fn error_handler<F, Fut>(f: F) -> ErrorHandlerFn
where
    F: Fn(Error) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HttpResponse> + Send + 'static,
{
    Arc::new(
        move |err: Error| -> Pin<Box<dyn Future<Output = HttpResponse> + Send>> {
            Box::pin(f(err))
        },
    )
}

/// Route definition with handler
#[derive(Clone)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
    pub handler: HandlerFn,
}

/// Router for managing routes and dispatching requests
#[derive(Default)]
pub struct Router {
    pub routes: Vec<Route>,
    fallback: Option<HandlerFn>,
    error_handler: Option<ErrorHandlerFn>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route to the router
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn get(&mut self, path: impl Into<String>, handler: HandlerFn) -> &mut Self {
        self.add_route(Route {
            method: HttpMethod::GET,
            path: path.into(),
            handler,
        });
        self
    }

    pub fn post(&mut self, path: impl Into<String>, handler: HandlerFn) -> &mut Self {
        self.add_route(Route {
            method: HttpMethod::POST,
            path: path.into(),
            handler,
        });
        self
    }

    /// Handler for GET requests no route claims (static assets)
    pub fn fallback(&mut self, handler: HandlerFn) -> &mut Self {
        self.fallback = Some(handler);
        self
    }

    /// Install the catch-all error responder
    pub fn on_error(&mut self, handler: ErrorHandlerFn) -> &mut Self {
        self.error_handler = Some(handler);
        self
    }

    /// Find a route that matches the request. HEAD is served by GET routes.
    pub async fn route(&self, mut request: HttpRequest) -> Result<HttpResponse, Error> {
        if let Some(end) = request.path.find('?') {
            request.path.truncate(end);
        }
        let head = is_head(&request);

        let mut path_matched = false;
        for route in &self.routes {
            let Some(params) = match_path(&route.path, &request.path) else {
                continue;
            };

            let method_matches = route.method.as_str().eq_ignore_ascii_case(&request.method)
                || (head && route.method == HttpMethod::GET);
            if !method_matches {
                path_matched = true;
                continue;
            }

            request.path_params = params;
            return (route.handler)(request).await;
        }

        if path_matched {
            return Err(Error::MethodNotAllowed(format!(
                "{} {}",
                request.method, request.path
            )));
        }

        if let Some(fallback) = &self.fallback {
            if head || request.method.eq_ignore_ascii_case(HttpMethod::GET.as_str()) {
                return fallback(request).await;
            }
        }

        Err(Error::RouteNotFound(format!(
            "{} {}",
            request.method, request.path
        )))
    }

    /// Dispatch the request and render any failure through the error responder.
    /// Responses to HEAD keep their status and headers but carry no body.
    pub async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let head = is_head(&request);
        let mut response = match self.route(request).await {
            Ok(response) => response,
            Err(err) => match &self.error_handler {
                Some(handler) => handler(err).await,
                None => {
                    let status = err.http_status();
                    HttpResponse::text(status.to_string()).with_status(status.code())
                }
            },
        };

        if head {
            response.body.clear();
        }
        response
    }
}

fn is_head(request: &HttpRequest) -> bool {
    request.method.eq_ignore_ascii_case(HttpMethod::HEAD.as_str())
}

/// Match a route path pattern against a request path
/// Returns Some(params) if matched, None otherwise
fn match_path(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = HashMap::new();

    for (pattern_part, path_part) in pattern_parts.iter().zip(path_parts.iter()) {
        if let Some(param_name) = pattern_part.strip_prefix(':') {
            let value = urlencoding::decode(path_part)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| path_part.to_string());
            params.insert(param_name.to_string(), value);
        } else if pattern_part != path_part {
            return None;
        }
    }

    Some(params)
}
