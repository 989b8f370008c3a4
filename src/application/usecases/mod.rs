//! 유스케이스 모음.

pub mod list_photos;
