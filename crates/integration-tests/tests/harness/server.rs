//! Runs the reference service on an ephemeral port and captures replies

use errmap_config::Config;
use errmap_server::Server;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Service under test; stops serving when dropped
pub struct TestServer {
    base: String,
    client: reqwest::Client,
    shutdown: CancellationToken,
}

/// Status, content type and raw body of one response
#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<String>,
    body: String,
}

impl Reply {
    /// Body decoded as JSON; panics on anything else
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|e| panic!("non-JSON body {:?}: {e}", self.body))
    }

    pub fn text(&self) -> &str {
        &self.body
    }
}

impl TestServer {
    /// Serve `config` on the listen address it names, normally `127.0.0.1:0`
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind(config.server.listen_address_or_default()).await?;
        let base = format!("http://{}", listener.local_addr()?);

        let router = Server::new(&config).into_router();
        let shutdown = CancellationToken::new();
        let stopped = shutdown.clone().cancelled_owned();

        tokio::spawn(async move {
            axum::serve(listener, router).with_graceful_shutdown(stopped).await.ok();
        });

        Ok(Self {
            base,
            client: reqwest::Client::new(),
            shutdown,
        })
    }

    pub async fn get(&self, path: &str) -> Reply {
        self.send(Method::GET, path, |request| request).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Reply {
        self.send(Method::POST, path, |request| request.json(body)).await
    }

    /// Issue any request, letting `build` add headers or a body
    pub async fn send(&self, method: Method, path: &str, build: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Reply {
        let request = build(self.client.request(method, format!("{}{path}", self.base)));
        let response = request.send().await.unwrap();

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await.unwrap();

        Reply {
            status,
            content_type,
            body,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
