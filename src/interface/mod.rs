//! Interface layer
//! 사용자와 맞닿는 CLI 진입 경로.

pub mod cli;
