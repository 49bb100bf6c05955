// Application wrapper and HTTP server loop

use crate::{Error, HttpRequest, HttpResponse, Router};
use http_body_util::{BodyExt, Full};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, body::Incoming as IncomingBody};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;

/// The running dashboard: a router bound to a listener
pub struct Application {
    pub router: Arc<Router>,
}

impl Application {
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    /// Serve until Ctrl-C is received
    pub async fn listen(self, host: &str, port: u16) -> Result<(), Error> {
        let listener = TcpListener::bind((host, port)).await?;
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "dashboard listening on http://{}", addr);

        self.serve(listener, shutdown_signal()).await
    }

    /// Accept connections on `listener` until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), Error>
    where
        F: std::future::Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let (stream, remote) = tokio::select! {
                accepted = listener.accept() => accepted?,
                _ = &mut shutdown => {
                    tracing::info!("shutdown signal received, no longer accepting connections");
                    return Ok(());
                }
            };

            let io = TokioIo::new(stream);
            let router = Arc::clone(&self.router);

            tokio::spawn(async move {
                let service = service_fn(move |req: Request<IncomingBody>| {
                    let router = Arc::clone(&router);
                    async move { handle_request(req, router).await }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    tracing::warn!(%remote, error = %err, "error serving connection");
                }
            });
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

/// Convert a hyper request, dispatch it, and convert the response back
async fn handle_request(
    req: Request<IncomingBody>,
    router: Arc<Router>,
) -> Result<Response<Full<bytes::Bytes>>, hyper::Error> {
    let started = Instant::now();
    let method = req.method().to_string();
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let mut request = HttpRequest::new(method.clone(), path.clone());
    for (name, value) in req.headers() {
        if let Ok(value) = value.to_str() {
            request.headers.insert(name.to_string(), value.to_string());
        }
    }
    request.body = req.collect().await?.to_bytes().to_vec();

    let response = router.handle(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );

    Ok(into_hyper_response(response))
}

fn into_hyper_response(response: HttpResponse) -> Response<Full<bytes::Bytes>> {
    let status = response.status;
    let mut builder = Response::builder().status(status);
    for (key, value) in response.headers {
        builder = builder.header(key, value);
    }

    builder
        .body(Full::new(bytes::Bytes::from(response.body)))
        .unwrap_or_else(|err| {
            tracing::error!(status, error = %err, "invalid response parts");
            let mut fallback = Response::new(Full::new(bytes::Bytes::from_static(
                b"500 Internal Server Error",
            )));
            *fallback.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler;

    #[test]
    fn test_into_hyper_response_copies_parts() {
        let response = into_hyper_response(HttpResponse::redirect("/customers"));
        assert_eq!(response.status(), hyper::StatusCode::FOUND);
        assert_eq!(response.headers()["Location"], "/customers");
    }

    #[test]
    fn test_into_hyper_response_invalid_status() {
        let response = into_hyper_response(HttpResponse::new(42));
        assert_eq!(response.status(), hyper::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let mut router = Router::new();
        router.get(
            "/",
            handler(|_req| async { Ok(HttpResponse::text("dashboard")) }),
        );

        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let app = Application::new(router);

        app.serve(listener, async {}).await.unwrap();
    }
}
