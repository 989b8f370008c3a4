//! JSON HTTP API 기반 사진 저장소 구현.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};
use url::Url;

use crate::application::ports::{FetchError, FetchResult, PhotoRepository};
use crate::domain::photo::Photo;

pub struct HttpPhotoRepository {
    client: Client,
    photos_endpoint: Url,
}

impl HttpPhotoRepository {
    /// `<base_url>/photos`를 조회하는 저장소를 생성한다.
    /// 타임아웃은 요청 전체(연결 + 응답 본문)에 적용된다.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("photo-album/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            photos_endpoint: photos_endpoint(base_url)?,
        })
    }

    #[cfg(test)]
    pub(crate) fn photos_endpoint(&self) -> &Url {
        &self.photos_endpoint
    }

    fn album_endpoint(&self, album_id: u16) -> Url {
        let mut url = self.photos_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("albumId", &album_id.to_string());
        url
    }

    fn request(&self, url: Url) -> RequestBuilder {
        self.client.get(url).header(ACCEPT, "application/json")
    }

    async fn fetch(&self, url: Url) -> FetchResult {
        debug!(%url, "requesting photos");
        let resp = self.request(url).send().await.map_err(classify_error)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "photo API returned non-success status");
            return Ok(None);
        }

        let photos: Vec<Photo> = resp.json().await.map_err(classify_error)?;
        Ok(Some(photos))
    }
}

#[async_trait]
impl PhotoRepository for HttpPhotoRepository {
    async fn get_all_photos(&self) -> FetchResult {
        self.fetch(self.photos_endpoint.clone()).await
    }

    async fn get_photos_by_album_id(&self, album_id: u16) -> FetchResult {
        self.fetch(self.album_endpoint(album_id)).await
    }
}

fn photos_endpoint(base_url: &str) -> Result<Url> {
    // 경로가 있는 base(`http://host/api`)도 마지막 세그먼트를 잃지 않도록 `/`로 끝맺는다.
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    let base = Url::parse(&base).with_context(|| format!("invalid API base URL: {base_url}"))?;
    base.join("photos")
        .with_context(|| format!("invalid API base URL: {base_url}"))
}

/// reqwest 오류를 사용자 안내용 분류로 변환한다.
fn classify_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(err.to_string())
    } else if err.is_connect() {
        FetchError::Connectivity(err.to_string())
    } else {
        FetchError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    const PHOTOS_JSON: &str = r#"[
        {"albumId": 1, "id": 1, "title": "Title", "url": "http://www.url.com", "thumbnailUrl": "http://www.thumbnailurl.com"},
        {"albumId": 1, "id": 2, "title": "Another Title", "url": "http://www.url2.com", "thumbnailUrl": "http://www.thumbnailurl2.com"}
    ]"#;

    fn repository(base_url: &str) -> HttpPhotoRepository {
        HttpPhotoRepository::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_keeps_base_path() {
        assert_eq!(
            repository("https://jsonplaceholder.typicode.com")
                .photos_endpoint()
                .as_str(),
            "https://jsonplaceholder.typicode.com/photos"
        );
        assert_eq!(
            repository("http://localhost:8080/api/").photos_endpoint().as_str(),
            "http://localhost:8080/api/photos"
        );
        assert_eq!(
            repository("http://localhost:8080/api").album_endpoint(3).as_str(),
            "http://localhost:8080/api/photos?albumId=3"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(HttpPhotoRepository::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn get_all_photos_decodes_json_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/photos")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PHOTOS_JSON)
            .create_async()
            .await;

        let photos = repository(&server.url())
            .get_all_photos()
            .await
            .unwrap()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].list_line(), "[1] Title");
        assert_eq!(photos[1].list_line(), "[2] Another Title");
    }

    #[tokio::test]
    async fn get_photos_by_album_id_sends_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/photos")
            .match_query(Matcher::UrlEncoded("albumId".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PHOTOS_JSON)
            .create_async()
            .await;

        let photos = repository(&server.url())
            .get_photos_by_album_id(1)
            .await
            .unwrap()
            .unwrap();

        mock.assert_async().await;
        assert!(photos.iter().all(|p| p.album_id == 1));
    }

    #[tokio::test]
    async fn non_success_status_yields_no_data() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/photos")
            .with_status(503)
            .create_async()
            .await;

        let result = repository(&server.url()).get_all_photos().await;

        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn malformed_body_is_other_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/photos")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        let result = repository(&server.url()).get_all_photos().await;

        assert!(matches!(result, Err(FetchError::Other(_))), "{result:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_connectivity_failure() {
        // 포트 1은 일반적으로 열려 있지 않다.
        let result = repository("http://127.0.0.1:1").get_all_photos().await;

        assert!(matches!(result, Err(FetchError::Connectivity(_))), "{result:?}");
    }
}
