use reqwest::{Client, Response};
use serde::Deserialize;

use crate::config::{ApiConfig, api};
use crate::error::{Error, Result};
use crate::network::ScoreSource;
use crate::score::{Score, ScoreKind};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

/// Error body shapes the API and the OAuth server send back.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn describe(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.clone())
    }
}

/// Authenticated osu! API v2 client using the client credentials grant.
///
/// Call [`ScoreSource::close`] when done to revoke the token.
pub struct OsuClient {
    client: Client,
    config: ApiConfig,
    access_token: String,
}

impl OsuClient {
    /// Build the HTTP client and exchange the credentials for an access token.
    pub async fn connect(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(api::REQUEST_TIMEOUT)
            .user_agent(concat!("ppstar/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let access_token = Self::request_token(&client, &config).await?;

        Ok(Self {
            client,
            config,
            access_token,
        })
    }

    async fn request_token(client: &Client, config: &ApiConfig) -> Result<String> {
        tracing::debug!("Requesting access token for client {}", config.client_id);

        let form = [
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.expose()),
            ("grant_type", "client_credentials"),
            ("scope", api::SCOPE),
        ];

        let response = client
            .post(&config.token_url)
            .header("Accept", "application/json")
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(Error::Auth(
                body.describe()
                    .unwrap_or_else(|| format!("token request rejected (HTTP {})", status.as_u16())),
            ));
        }

        let token: TokenResponse = check_status(response).await?.json().await?;
        tracing::debug!("Access token acquired (expires in {}s)", token.expires_in);
        Ok(token.access_token)
    }

    /// `GET /users/{user_id}/scores/{kind}`
    pub async fn user_scores(&self, user_id: u64, kind: ScoreKind) -> Result<Vec<Score>> {
        let url = format!(
            "{}/users/{}/scores/{}",
            self.config.base_url.trim_end_matches('/'),
            user_id,
            kind.path_segment()
        );

        let mut query = vec![("limit", self.config.limit.to_string())];
        if let Some(mode) = self.config.mode {
            query.push(("mode", mode.short_name().to_string()));
        }
        if kind == ScoreKind::Recent {
            let include_fails = if self.config.include_fails { "1" } else { "0" };
            query.push(("include_fails", include_fails.to_string()));
        }

        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .header("x-api-version", api::API_VERSION)
            .query(&query)
            .send()
            .await?;

        let scores = check_status(response).await?.json().await?;
        Ok(scores)
    }
}

impl ScoreSource for OsuClient {
    async fn recent_scores(&self, user_id: u64) -> Result<Vec<Score>> {
        self.user_scores(user_id, ScoreKind::Recent).await
    }

    async fn best_scores(&self, user_id: u64) -> Result<Vec<Score>> {
        self.user_scores(user_id, ScoreKind::Best).await
    }

    /// Revoke the access token and release the connection pool.
    ///
    /// Revocation is best effort; a failure is logged, not returned.
    async fn close(self) {
        let url = format!(
            "{}/oauth/tokens/current",
            self.config.base_url.trim_end_matches('/')
        );

        let result = self
            .client
            .delete(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .and_then(Response::error_for_status);

        match result {
            Ok(_) => tracing::debug!("Access token revoked"),
            Err(e) => tracing::warn!("Failed to revoke access token: {}", Error::from(e)),
        }
    }
}

/// Turn a non-success response into `Error::Api`, keeping the server's message.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.describe())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or(text);

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_prefers_message() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error": "invalid_client", "error_description": "Client authentication failed", "message": "Client authentication failed"}"#,
        )
        .unwrap();
        assert_eq!(body.describe().as_deref(), Some("Client authentication failed"));
    }

    #[test]
    fn test_error_body_falls_back_to_error_code() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": null}"#).unwrap();
        assert_eq!(body.describe(), None);

        let body: ErrorBody = serde_json::from_str(r#"{"error": "Specified user couldn't be found."}"#).unwrap();
        assert_eq!(body.describe().as_deref(), Some("Specified user couldn't be found."));
    }

    #[test]
    fn test_token_response_parses() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"token_type": "Bearer", "expires_in": 86400, "access_token": "abc.def"}"#,
        )
        .unwrap();
        assert_eq!(token.access_token, "abc.def");
        assert_eq!(token.expires_in, 86400);
    }

    /// Minimal HTTP/1.1 server standing in for osu.ppy.sh.
    ///
    /// Each connection carries one request and is closed after the reply.
    mod stub {
        use std::sync::{Arc, Mutex};

        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::{TcpListener, TcpStream};

        use crate::config::{ApiConfig, Secret};

        pub const TOKEN: &str = "stub-token";
        pub const MISSING_USER: u64 = 404;

        const SCORES: &str = r#"[{"id": 1, "pp": 100.5, "beatmap": {"difficulty_rating": 4.5}}]"#;

        #[derive(Debug, Clone)]
        pub struct Request {
            pub method: String,
            pub target: String,
            /// Header block, lowercased.
            pub headers: String,
            pub body: String,
        }

        impl Request {
            pub fn path(&self) -> &str {
                self.target.split('?').next().unwrap_or_default()
            }
        }

        pub struct Server {
            base: String,
            log: Arc<Mutex<Vec<Request>>>,
        }

        impl Server {
            pub async fn start() -> Self {
                let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
                let base = format!("http://{}", listener.local_addr().unwrap());
                let log = Arc::new(Mutex::new(Vec::new()));

                let server_log = Arc::clone(&log);
                tokio::spawn(async move {
                    while let Ok((mut stream, _)) = listener.accept().await {
                        let request = read_request(&mut stream).await;
                        let (status, body) = reply(&request);
                        server_log.lock().unwrap().push(request);

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        let _ = stream.write_all(response.as_bytes()).await;
                        let _ = stream.shutdown().await;
                    }
                });

                Self { base, log }
            }

            pub fn config(&self, secret: &str) -> ApiConfig {
                let mut config = ApiConfig::new("7".to_string(), Secret::new(secret));
                config.base_url = format!("{}/api/v2", self.base);
                config.token_url = format!("{}/oauth/token", self.base);
                config
            }

            pub fn requests(&self) -> Vec<Request> {
                self.log.lock().unwrap().clone()
            }
        }

        fn reply(request: &Request) -> (&'static str, &'static str) {
            let missing_user = format!("/api/v2/users/{}/scores/recent", MISSING_USER);
            match (request.method.as_str(), request.path()) {
                ("POST", "/oauth/token") if request.body.contains("client_secret=wrong") => (
                    "401 Unauthorized",
                    r#"{"error": "invalid_client", "error_description": "Client authentication failed"}"#,
                ),
                ("POST", "/oauth/token") => (
                    "200 OK",
                    r#"{"token_type": "Bearer", "expires_in": 86400, "access_token": "stub-token"}"#,
                ),
                ("GET", path) if path == missing_user => {
                    ("404 Not Found", r#"{"error": "Specified user couldn't be found."}"#)
                }
                ("GET", path) if path.starts_with("/api/v2/users/") => ("200 OK", SCORES),
                ("DELETE", "/api/v2/oauth/tokens/current") => ("200 OK", "{}"),
                _ => ("500 Internal Server Error", "{}"),
            }
        }

        async fn read_request(stream: &mut TcpStream) -> Request {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            let head_len = loop {
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                let n = stream.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed mid-request");
                buf.extend_from_slice(&chunk[..n]);
            };

            let head = String::from_utf8_lossy(&buf[..head_len]).to_string();
            let (request_line, headers) = head.split_once("\r\n").unwrap();
            let headers = headers.to_lowercase();

            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);

            while buf.len() < head_len + content_length {
                let n = stream.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed mid-body");
                buf.extend_from_slice(&chunk[..n]);
            }

            let mut parts = request_line.split_whitespace();
            Request {
                method: parts.next().unwrap().to_string(),
                target: parts.next().unwrap().to_string(),
                headers,
                body: String::from_utf8_lossy(&buf[head_len..head_len + content_length]).to_string(),
            }
        }
    }

    #[tokio::test]
    async fn test_requests_sent_to_api() {
        let server = stub::Server::start().await;
        let config = server
            .config("s3cret")
            .with_mode(Some(crate::score::GameMode::Mania))
            .with_limit(50)
            .with_include_fails(true);

        let client = OsuClient::connect(config).await.unwrap();
        let recents = client.recent_scores(42).await.unwrap();
        let bests = client.best_scores(42).await.unwrap();
        client.close().await;

        assert_eq!(recents.len(), 1);
        assert_eq!(recents[0].pp, Some(100.5));
        assert_eq!(bests[0].difficulty(), 4.5);

        let requests = server.requests();
        let targets: Vec<(&str, &str)> = requests
            .iter()
            .map(|r| (r.method.as_str(), r.target.as_str()))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("POST", "/oauth/token"),
                ("GET", "/api/v2/users/42/scores/recent?limit=50&mode=mania&include_fails=1"),
                ("GET", "/api/v2/users/42/scores/best?limit=50&mode=mania"),
                ("DELETE", "/api/v2/oauth/tokens/current"),
            ]
        );

        let token = &requests[0];
        assert!(token.body.contains("client_id=7"));
        assert!(token.body.contains("client_secret=s3cret"));
        assert!(token.body.contains("grant_type=client_credentials"));
        assert!(token.body.contains("scope=public"));

        for request in &requests[1..] {
            assert!(request.headers.contains(&format!("authorization: bearer {}", stub::TOKEN)));
        }
        assert!(requests[1].headers.contains("x-api-version: 20220704"));
    }

    #[tokio::test]
    async fn test_missing_user_is_api_error_and_client_still_closes() {
        let server = stub::Server::start().await;
        let client = OsuClient::connect(server.config("s3cret")).await.unwrap();

        let err = crate::network::fetch_and_close(client, stub::MISSING_USER)
            .await
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Specified user couldn't be found.");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }

        let requests = server.requests();
        let last = requests.last().unwrap();
        assert_eq!(last.method, "DELETE");
        assert_eq!(last.path(), "/api/v2/oauth/tokens/current");
        assert!(requests.iter().all(|r| !r.path().ends_with("/scores/best")));
    }

    #[tokio::test]
    async fn test_rejected_credentials_are_auth_error() {
        let server = stub::Server::start().await;
        let err = OsuClient::connect(server.config("wrong")).await.err().unwrap();
        match err {
            Error::Auth(message) => assert_eq!(message, "Client authentication failed"),
            other => panic!("Expected Auth error, got {:?}", other),
        }
        assert_eq!(server.requests().len(), 1);
    }
}
