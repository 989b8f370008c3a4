//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 4000;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 사진 API 연결 설정
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// API base URL (`<base>/photos`를 조회한다)
    pub base_url: Option<String>,
    /// 요청 타임아웃(ms)
    pub timeout_ms: Option<u64>,
}

/// 명령행 옵션으로 받은 설정 덮어쓰기 값.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_base: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl Config {
    pub fn api_base_url(&self) -> &str {
        self.api
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// 0은 모든 요청을 즉시 실패시키므로 미설정으로 본다.
    pub fn request_timeout(&self) -> Duration {
        let timeout_ms = self
            .api
            .timeout_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        Duration::from_millis(timeout_ms)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.api.merge_from(other.api);
    }

    /// 명령행 옵션은 모든 설정 파일보다 우선한다.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(base) = &overrides.api_base {
            self.api.base_url = Some(base.clone());
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.api.timeout_ms = Some(timeout_ms);
        }
    }
}

impl ApiConfig {
    pub(crate) fn merge_from(&mut self, other: ApiConfig) {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.timeout_ms.is_some() {
            self.timeout_ms = other.timeout_ms;
        }
    }
}
