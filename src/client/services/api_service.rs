use crate::common::error::FetchError;
use crate::common::models::Amphibian;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use url::Url;

const AMPHIBIANS_PATH: &str = "amphibians";

/// Thin HTTP client for the amphibians endpoint.
#[derive(Debug, Clone)]
pub struct AmphibiansApiService {
    client: reqwest::Client,
    base_url: String,
}

impl AmphibiansApiService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full url of the list endpoint. A base without a trailing slash is treated as a directory.
    pub fn endpoint(&self) -> Result<Url, FetchError> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Url::parse(&base)?.join(AMPHIBIANS_PATH)?)
    }

    /// GET the list of amphibians, in the order the server sends them.
    pub async fn get_amphibians(&self) -> Result<Vec<Amphibian>, FetchError> {
        match self.fetch_list().await {
            Ok(list) => {
                debug!("Fetched {} amphibians", list.len());
                Ok(list)
            }
            Err(e) => {
                warn!("Fetching amphibians from {} failed: {}", self.base_url, e);
                Err(e)
            }
        }
    }

    /// GET the raw bytes of a photo.
    pub async fn get_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.fetch_bytes(url).await.map_err(|e| {
            warn!("Fetching photo {} failed: {}", url, e);
            e
        })
    }

    async fn fetch_list(&self) -> Result<Vec<Amphibian>, FetchError> {
        let url = self.endpoint()?;
        let body = self.get_checked(url, "application/json").await?.text().await?;
        parse_amphibians(&body)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(url)?;
        let bytes = self.get_checked(url, "image/*").await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn get_checked(&self, url: Url, accept: &str) -> Result<reqwest::Response, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).header(ACCEPT, accept).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response)
    }
}

/// Decode a list response body. Anything other than a JSON array of records is an error.
pub fn parse_amphibians(body: &str) -> Result<Vec<Amphibian>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const TWO_RECORDS: &str = r#"[
        {"name": "Great Basin Spadefoot", "type": "Toad", "description": "Nocturnal.", "img_src": "https://example.com/a.png"},
        {"name": "Tiger Salamander", "type": "Salamander", "description": "Large.", "img_src": "https://example.com/b.png"}
    ]"#;

    /// Serves a single canned HTTP response and reports the request line it received.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let mut read = 0;
            loop {
                let n = stream.read(&mut buf[read..]).await.unwrap();
                read += n;
                if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let request = String::from_utf8_lossy(&buf[..read]).to_string();
            let _ = tx.send(request.lines().next().unwrap_or_default().to_string());
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });
        (format!("http://{}", addr), rx)
    }

    fn local_service(base: String) -> AmphibiansApiService {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        AmphibiansApiService::with_client(client, base)
    }

    #[test]
    fn parse_preserves_order_and_field_names() {
        let list = parse_amphibians(TWO_RECORDS).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Great Basin Spadefoot");
        assert_eq!(list[1].kind, "Salamander");
        assert_eq!(list[1].img_src, "https://example.com/b.png");
    }

    #[test]
    fn parse_accepts_empty_array() {
        assert!(parse_amphibians("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_non_array_bodies() {
        assert!(matches!(parse_amphibians(r#"{"name": "x"}"#), Err(FetchError::Decode(_))));
        assert!(matches!(parse_amphibians("<html></html>"), Err(FetchError::Decode(_))));
        assert!(matches!(parse_amphibians(r#"[{"name": "missing fields"}]"#), Err(FetchError::Decode(_))));
    }

    #[test]
    fn endpoint_treats_base_as_directory() {
        let svc = AmphibiansApiService::new("https://example.com/api");
        assert_eq!(svc.endpoint().unwrap().as_str(), "https://example.com/api/amphibians");
        let svc = AmphibiansApiService::new("https://example.com/");
        assert_eq!(svc.endpoint().unwrap().as_str(), "https://example.com/amphibians");
    }

    #[test]
    fn endpoint_rejects_invalid_base() {
        let svc = AmphibiansApiService::new("not a url");
        assert!(matches!(svc.endpoint(), Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn get_amphibians_decodes_success_body() {
        let (base, request) = serve_once("HTTP/1.1 200 OK", TWO_RECORDS).await;
        let svc = local_service(base);
        let list = svc.get_amphibians().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].kind, "Toad");
        assert_eq!(request.await.unwrap(), "GET /amphibians HTTP/1.1");
    }

    #[tokio::test]
    async fn get_amphibians_reports_status_errors() {
        let (base, _request) = serve_once("HTTP/1.1 500 Internal Server Error", "oops").await;
        let svc = local_service(base);
        match svc.get_amphibians().await {
            Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_amphibians_reports_malformed_body() {
        let (base, _request) = serve_once("HTTP/1.1 200 OK", "{not json").await;
        let svc = local_service(base);
        assert!(matches!(svc.get_amphibians().await, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn get_amphibians_reports_transport_errors() {
        // Bind and drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let svc = local_service(format!("http://{}", addr));
        assert!(matches!(svc.get_amphibians().await, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn get_image_returns_raw_bytes() {
        let (base, request) = serve_once("HTTP/1.1 200 OK", "PNGDATA").await;
        let svc = local_service(base.clone());
        let bytes = svc.get_image(&format!("{}/photos/toad.png", base)).await.unwrap();
        assert_eq!(bytes, b"PNGDATA");
        assert_eq!(request.await.unwrap(), "GET /photos/toad.png HTTP/1.1");
    }
}
