// In-process HTTP client

use wastedash_core::{HttpMethod, HttpRequest, HttpResponse, Router, encode_form};
use std::sync::Arc;

/// Sends requests straight through a router, error responder included
#[derive(Clone)]
pub struct TestClient {
    router: Arc<Router>,
}

impl TestClient {
    pub fn new(router: Arc<Router>) -> Self {
        Self { router }
    }

    pub fn from_router(router: Router) -> Self {
        Self::new(Arc::new(router))
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(HttpMethod::GET, path, Vec::new()).await
    }

    /// POST an URL-encoded form, as a browser submits one
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = match encode_form(fields) {
            Ok(body) => body,
            Err(err) => panic!("Failed to encode form for {}: {}", path, err),
        };
        self.request(HttpMethod::POST, path, body.into_bytes()).await
    }

    pub async fn post(&self, path: &str, body: Vec<u8>) -> TestResponse {
        self.request(HttpMethod::POST, path, body).await
    }

    pub async fn request(&self, method: HttpMethod, path: &str, body: Vec<u8>) -> TestResponse {
        let mut request = HttpRequest::new(method.as_str().to_string(), path.to_string())
            .with_body(body);
        if method == HttpMethod::POST {
            request = request.with_header("Content-Type", "application/x-www-form-urlencoded");
        }

        TestResponse(self.router.handle(request).await)
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse(pub HttpResponse);

impl TestResponse {
    pub fn status(&self) -> u16 {
        self.0.status
    }

    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.0.body).into_owned()
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.0
            .headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// Redirect target, if any
    pub fn location(&self) -> Option<&str> {
        self.header("Location")
    }

    pub fn into_inner(self) -> HttpResponse {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wastedash_core::{handler, parse_form_map};

    fn client() -> TestClient {
        let mut router = Router::new();
        router
            .get(
                "/vehicles",
                handler(|_req| async { Ok(HttpResponse::html("<h1>Vehicles</h1>")) }),
            )
            .post(
                "/vehicles/new",
                handler(|req: HttpRequest| async move {
                    let form = parse_form_map(&req.body)?;
                    let plate = form.get("license_plate").cloned().unwrap_or_default();
                    Ok(HttpResponse::redirect(format!("/vehicles?plate={}", plate)))
                }),
            );
        TestClient::from_router(router)
    }

    #[tokio::test]
    async fn test_get() {
        let response = client().get("/vehicles").await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.body_string(), "<h1>Vehicles</h1>");
        assert_eq!(
            response.header("content-type"),
            Some("text/html; charset=utf-8")
        );
    }

    #[tokio::test]
    async fn test_post_form() {
        let response = client()
            .post_form("/vehicles/new", &[("license_plate", "WM1234")])
            .await;
        assert_eq!(response.status(), 302);
        assert_eq!(response.location(), Some("/vehicles?plate=WM1234"));
    }

    #[tokio::test]
    async fn test_unknown_route_goes_through_handle() {
        let response = client().get("/nowhere").await;
        assert_eq!(response.status(), 404);
    }
}
