//! 사진 엔티티.

use serde::{Deserialize, Serialize};

/// 원격 API가 반환하는 사진 레코드.
/// 화면에는 `id`와 `title`만 쓰고 나머지 필드는 그대로 전달한다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: u32,
    pub album_id: u32,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

impl Photo {
    /// 목록 한 줄 표기: `[<id>] <title>`.
    pub fn list_line(&self) -> String {
        format!("[{}] {}", self.id, self.title)
    }
}
