//! Domain layer
//! 명령 해석 규칙과 사진 엔티티를 표현한다.

pub mod command;
pub mod photo;
