//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합한다.

mod loader;

use anyhow::Result;
use tracing::debug;

use crate::application::config::Config;

/// 병합된 최종 설정을 로딩한다.
pub fn load() -> Result<Config> {
    let loaded = loader::load_merged_config()?;
    debug!(paths = ?loaded.loaded_paths, "effective config merged");
    Ok(loaded.config)
}
