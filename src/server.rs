//! HTTP front end for the policy engine.
//!
//! A small hyper HTTP/1 server. Routing and response rendering are plain
//! functions over [`ApiResponse`]; the connection loop only moves bytes.
//!
//! | Method | Path | Action |
//! |--------|------|--------|
//! | POST | `/calculate` | One policy, or all if `algorithm` is absent |
//! | POST | `/compare` | All six policies |
//! | POST | `/stats` | Seek statistics for all six, with the best policy |
//! | GET | `/policies` | Supported policy list |
//! | GET | `/health` | Liveness |
//! | OPTIONS | any | CORS preflight |

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Bytes, Incoming};
use hyper::header::{self, HeaderValue};
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::api::{self, ApiResponse};
use crate::config::ServerConfig;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Errors starting or running the server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// The API server. Built once per process from an explicit config.
#[derive(Debug, Clone)]
pub struct Server {
    config: Arc<ServerConfig>,
    cors_origin: HeaderValue,
}

impl Server {
    /// Creates a server, checking that the CORS origin is a valid header.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let cors_origin = HeaderValue::from_str(&config.cors_origin)
            .map_err(|_| ServerError::InvalidCorsOrigin(config.cors_origin.clone()))?;
        Ok(Self {
            config: Arc::new(config),
            cors_origin,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Binds the configured address and serves until `shutdown` resolves.
    pub async fn run(self, shutdown: impl Future<Output = ()>) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.config.listen_addr).await?;
        info!("Disk scheduling API listening on {}", listener.local_addr()?);
        self.serve(listener, shutdown).await
    }

    /// Serves connections from an already bound listener.
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), ServerError> {
        tokio::pin!(shutdown);

        loop {
            let accepted = tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, no longer accepting connections");
                    return Ok(());
                }
                accepted = listener.accept() => accepted,
            };
            let (stream, peer) = match accepted {
                Ok(conn) => conn,
                Err(e) => {
                    error!("Accept error: {}", e);
                    continue;
                }
            };

            let server = self.clone();
            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let svc = service_fn(move |req: Request<Incoming>| {
                    let server = server.clone();
                    async move { Ok::<_, Infallible>(server.handle(req).await) }
                });
                if let Err(e) = hyper::server::conn::http1::Builder::new()
                    .serve_connection(io, svc)
                    .await
                {
                    if !e.to_string().contains("connection closed") {
                        error!("Connection error from {}: {}", peer, e);
                    }
                }
            });
        }
    }

    async fn handle(&self, req: Request<Incoming>) -> Response<Full<Bytes>> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let body = match Limited::new(req.into_body(), MAX_BODY_BYTES).collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                warn!(%method, %path, "Failed to read request body: {}", e);
                return self.render(body_error_response(&*e));
            }
        };

        let default_disk_size = self.config.default_disk_size;
        let (method, path, resp) = match tokio::task::spawn_blocking(move || {
            let resp = route(&method, &path, &body, default_disk_size);
            (method, path, resp)
        })
        .await
        {
            Ok(handled) => handled,
            Err(e) => {
                error!("Request handler failed: {}", e);
                return self.render(ApiResponse::error(500, "Internal Server Error"));
            }
        };
        debug!(%method, %path, status = resp.status, "request handled");
        self.render(resp)
    }

    /// Converts an [`ApiResponse`] into an HTTP response with CORS headers.
    pub fn render(&self, resp: ApiResponse) -> Response<Full<Bytes>> {
        let body = if resp.body.is_null() {
            Bytes::new()
        } else {
            Bytes::from(resp.body.to_string())
        };

        let mut http = Response::new(Full::new(body));
        *http.status_mut() =
            StatusCode::from_u16(resp.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let headers = http.headers_mut();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, self.cors_origin.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        if !resp.body.is_null() {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        http
    }
}

/// Maps a body read failure to 413 when the size limit tripped, else 400.
pub fn body_error_response(err: &(dyn std::error::Error + 'static)) -> ApiResponse {
    if err.downcast_ref::<LengthLimitError>().is_some() {
        ApiResponse::error(413, format!("Request body exceeds {MAX_BODY_BYTES} bytes"))
    } else {
        ApiResponse::error(400, format!("Failed to read request body: {err}"))
    }
}

/// Dispatches a request to the API.
pub fn route(method: &Method, path: &str, body: &[u8], default_disk_size: u32) -> ApiResponse {
    let path = path.trim_end_matches('/');

    if method == Method::OPTIONS {
        return ApiResponse {
            status: 204,
            body: Value::Null,
        };
    }

    match (method, path) {
        (&Method::POST, "/calculate") => api::calculate(body, default_disk_size),
        (&Method::POST, "/compare") => api::compare(body, default_disk_size),
        (&Method::POST, "/stats") => api::stats(body, default_disk_size),
        (&Method::GET, "/policies") => ApiResponse::ok(api::policies_body()),
        (&Method::GET, "/health") => ApiResponse::ok(json!({ "status": "ok" })),
        (_, "/calculate" | "/compare" | "/stats" | "/policies" | "/health") => {
            ApiResponse::error(405, "Method Not Allowed")
        }
        _ => ApiResponse::error(404, "Not Found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(path: &str, body: Value) -> ApiResponse {
        route(&Method::POST, path, body.to_string().as_bytes(), 200)
    }

    #[test]
    fn test_route_calculate() {
        let resp = post(
            "/calculate",
            json!({ "tracks": [98, 183, 37, 122, 14, 124, 65, 67], "head": 53, "algorithm": "look" }),
        );
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["totalSeekTime"], 299);
    }

    #[test]
    fn test_route_compare_ignores_algorithm() {
        let resp = post(
            "/compare",
            json!({ "tracks": [10, 20], "head": 15, "algorithm": "bogus" }),
        );
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_route_stats() {
        let resp = post(
            "/stats",
            json!({ "tracks": [98, 183, 37, 122, 14, 124, 65, 67], "head": 53 }),
        );
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["best"], "Shortest Seek Time First (SSTF)");
        assert_eq!(resp.body["policies"]["C-SCAN"]["longestSeek"], 199);
        assert_eq!(route(&Method::GET, "/stats", b"", 200).status, 405);
    }

    #[tokio::test]
    async fn test_oversized_body_is_413() {
        let Err(err) = Limited::new(Full::new(Bytes::from(vec![0u8; 10])), 4)
            .collect()
            .await
        else {
            panic!("body over the limit was accepted");
        };
        assert_eq!(body_error_response(&*err).status, 413);
    }

    #[test]
    fn test_other_body_errors_are_400() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset by peer",
        ));
        let resp = body_error_response(&*err);
        assert_eq!(resp.status, 400);
        assert!(resp.body["error"].as_str().unwrap().contains("reset by peer"));
    }

    #[test]
    fn test_route_trailing_slash() {
        let resp = post("/calculate/", json!({ "tracks": [], "head": 1, "algorithm": "fcfs" }));
        assert_eq!(resp.status, 200);
    }

    #[test]
    fn test_route_health_and_policies() {
        let health = route(&Method::GET, "/health", b"", 200);
        assert_eq!(health.body, json!({ "status": "ok" }));
        let policies = route(&Method::GET, "/policies", b"", 200);
        assert_eq!(policies.body.as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_route_preflight() {
        let resp = route(&Method::OPTIONS, "/calculate", b"", 200);
        assert_eq!(resp.status, 204);
        assert!(resp.body.is_null());
    }

    #[test]
    fn test_route_wrong_method_and_unknown_path() {
        assert_eq!(route(&Method::GET, "/calculate", b"", 200).status, 405);
        assert_eq!(route(&Method::POST, "/nope", b"{}", 200).status, 404);
    }

    #[test]
    fn test_render_sets_cors_and_status() {
        let server = Server::new(ServerConfig {
            cors_origin: "http://localhost:3000".into(),
            ..Default::default()
        })
        .unwrap();
        let http = server.render(ApiResponse::error(400, "Invalid algorithm"));
        assert_eq!(http.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            http.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert_eq!(http.headers()[header::CONTENT_TYPE], "application/json");

        let preflight = server.render(ApiResponse {
            status: 204,
            body: Value::Null,
        });
        assert_eq!(preflight.status(), StatusCode::NO_CONTENT);
        assert!(preflight.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_invalid_cors_origin() {
        let result = Server::new(ServerConfig {
            cors_origin: "bad\norigin".into(),
            ..Default::default()
        });
        assert!(matches!(result, Err(ServerError::InvalidCorsOrigin(_))));
    }
}
