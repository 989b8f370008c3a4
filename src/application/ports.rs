//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::application::config::Config;
use crate::domain::photo::Photo;

/// 사진 조회 실패 분류.
/// 인터프리터는 종류에 따라 안내 문구를 고른다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network connectivity failure: {0}")]
    Connectivity(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("request failed: {0}")]
    Other(String),
}

/// `Ok(None)`은 오류 없이 데이터를 받지 못한 경우다.
pub type FetchResult = std::result::Result<Option<Vec<Photo>>, FetchError>;

/// 원격 사진 저장소 포트.
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn get_all_photos(&self) -> FetchResult;
    async fn get_photos_by_album_id(&self, album_id: u16) -> FetchResult;
}

/// 설정 로딩을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
}
