//! 사진 목록 조회 유스케이스.

use tracing::debug;

use crate::application::ports::{FetchResult, PhotoRepository};

/// 앨범 필터 유무에 따라 저장소 호출을 고른다.
/// 명령당 정확히 한 번 호출하며 재시도하지 않는다.
pub struct ListPhotosUseCase<'a> {
    pub repository: &'a dyn PhotoRepository,
}

impl<'a> ListPhotosUseCase<'a> {
    pub async fn execute(&self, album_id: Option<u16>) -> FetchResult {
        let result = match album_id {
            None => self.repository.get_all_photos().await,
            Some(id) => self.repository.get_photos_by_album_id(id).await,
        };

        match &result {
            Ok(Some(photos)) => debug!(?album_id, count = photos.len(), "photos retrieved"),
            Ok(None) => debug!(?album_id, "repository returned no data"),
            Err(err) => debug!(?album_id, error = %err, "photo fetch failed"),
        }

        result
    }
}
