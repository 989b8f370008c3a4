//! 원격 사진 API 연동 계층.

mod http;

pub use http::HttpPhotoRepository;
