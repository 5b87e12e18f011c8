//! Shared harness for specs

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use zs_daemon::{router, Credentials, RouterOptions};
use zs_store::StateStore;

pub use zs_adapters::FakeCoordinator;
pub use zs_core::Version;

/// A backend wired to a fake ensemble
pub struct Backend {
    app: Router,
    pub zk: FakeCoordinator,
}

impl Backend {
    pub fn new() -> Self {
        Self::with_options(RouterOptions::default())
    }

    pub fn with_auth(user: &str, password: &str) -> Self {
        Self::with_options(RouterOptions {
            credentials: Some(Credentials::new(user, password)),
            ..RouterOptions::default()
        })
    }

    fn with_options(options: RouterOptions) -> Self {
        let zk = FakeCoordinator::new();
        let app = router(StateStore::new(zk.clone()), options);
        Self { app, zk }
    }

    /// Start a request against `/name`
    pub fn call(&self, method: &str, name: &str) -> Call {
        Call {
            app: self.app.clone(),
            request: Request::builder()
                .method(Method::from_bytes(method.as_bytes()).unwrap())
                .uri(format!("/{name}")),
            body: Vec::new(),
        }
    }

    pub async fn get(&self, name: &str) -> Reply {
        self.call("GET", name).send().await
    }

    pub async fn post(&self, name: &str, body: &[u8]) -> Reply {
        self.call("POST", name).body(body).send().await
    }

    pub async fn delete(&self, name: &str) -> Reply {
        self.call("DELETE", name).send().await
    }

    pub async fn lock(&self, name: &str, lockinfo: &[u8]) -> Reply {
        self.call("LOCK", name).body(lockinfo).send().await
    }

    pub async fn unlock(&self, name: &str) -> Reply {
        self.call("UNLOCK", name).send().await
    }

    /// Data stored at `path`, if the znode exists
    pub fn znode(&self, path: &str) -> Option<Vec<u8>> {
        self.zk.node(path).map(|n| n.data)
    }
}

/// A request being built
pub struct Call {
    app: Router,
    request: axum::http::request::Builder,
    body: Vec<u8>,
}

impl Call {
    pub fn body(mut self, body: &[u8]) -> Self {
        self.body = body.to_vec();
        self
    }

    pub fn header(mut self, name: header::HeaderName, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    pub async fn send(self) -> Reply {
        let request = self.request.body(Body::from(self.body)).unwrap();
        let response = self.app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        Reply {
            status,
            content_type,
            body: body.to_vec(),
        }
    }
}

/// A response with its body buffered
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn status_is(self, status: StatusCode) -> Self {
        assert_eq!(
            self.status,
            status,
            "body: {}",
            String::from_utf8_lossy(&self.body)
        );
        self
    }

    pub fn body_is(self, expected: &[u8]) -> Self {
        similar_asserts::assert_eq!(
            String::from_utf8_lossy(&self.body),
            String::from_utf8_lossy(expected)
        );
        self
    }

    pub fn body_has(self, needle: &str) -> Self {
        let text = String::from_utf8_lossy(&self.body);
        assert!(text.contains(needle), "expected {needle:?} in {text:?}");
        self
    }
}
