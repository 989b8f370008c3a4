//! 애플리케이션 조립(composition root) 모듈.

use std::io::Write;

use anyhow::Result;

use crate::application::config::{Config, ConfigOverrides};
use crate::application::ports::ConfigRepository;
use crate::application::usecases::list_photos::ListPhotosUseCase;
use crate::infrastructure::adapters::JsonConfigRepository;
use crate::infrastructure::photos::HttpPhotoRepository;
use crate::interface::cli::interpreter::Interpreter;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    photo_repository: HttpPhotoRepository,
}

impl AppComposition {
    /// 설정 파일을 읽고 명령행 덮어쓰기를 적용해 조립한다.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        Self::with_config_repository(&JsonConfigRepository, overrides)
    }

    /// 설정 저장소를 외부에서 주입한다.
    pub fn with_config_repository(
        config_repo: &dyn ConfigRepository,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let mut config = config_repo.load()?;
        config.apply_overrides(overrides);
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            photo_repository: HttpPhotoRepository::new(
                config.api_base_url(),
                config.request_timeout(),
            )?,
        })
    }

    /// 사진 목록 조회 유스케이스를 생성한다.
    pub fn list_photos_usecase(&self) -> ListPhotosUseCase<'_> {
        ListPhotosUseCase {
            repository: &self.photo_repository,
        }
    }

    /// 주어진 출력 스트림에 그리는 인터프리터를 생성한다.
    pub fn interpreter<W: Write>(&self, out: W) -> Interpreter<'_, W> {
        Interpreter::new(self.list_photos_usecase(), out)
    }

    #[cfg(test)]
    pub(crate) fn photo_repository(&self) -> &HttpPhotoRepository {
        &self.photo_repository
    }
}
