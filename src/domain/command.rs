//! 사용자 입력 한 줄을 검증된 명령 값으로 해석하는 모듈.

pub const EXIT_KEYWORD: &str = "exit";
pub const HELP_KEYWORD: &str = "help";
pub const PHOTO_ALBUM_KEYWORD: &str = "photo-album";

/// 입력 한 줄에서 해석된 명령.
/// 입력마다 새로 만들어지고, 한 번 실행된 뒤 버려진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    /// `photo-album [<#>]`. 앨범 번호가 없으면 전체 사진을 조회한다.
    ListPhotos { album_id: Option<u16> },
    Invalid(ParseError),
}

/// 잘못된 입력의 세부 사유. 사유마다 안내 문구가 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// 알 수 없는 명령어(빈 입력 포함).
    Unrecognized,
    /// `photo-album` 뒤의 인자가 0..=65535 정수가 아니거나 인자가 너무 많음.
    BadArgument,
}

impl Command {
    /// 공백으로 나뉜 토큰 목록을 명령으로 변환한다.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let Some((head, rest)) = tokens.split_first() else {
            return Self::Invalid(ParseError::Unrecognized);
        };

        match (head.as_ref(), rest) {
            (EXIT_KEYWORD, []) => Self::Exit,
            (HELP_KEYWORD, []) => Self::Help,
            (PHOTO_ALBUM_KEYWORD, []) => Self::ListPhotos { album_id: None },
            (PHOTO_ALBUM_KEYWORD, [param]) => match param.as_ref().parse::<u16>() {
                Ok(album_id) => Self::ListPhotos {
                    album_id: Some(album_id),
                },
                Err(_) => Self::Invalid(ParseError::BadArgument),
            },
            (PHOTO_ALBUM_KEYWORD, _) => Self::Invalid(ParseError::BadArgument),
            _ => Self::Invalid(ParseError::Unrecognized),
        }
    }

    /// 입력 한 줄을 공백 기준으로 나눈 뒤 해석한다.
    pub fn parse_line(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        Self::parse(&tokens)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}
