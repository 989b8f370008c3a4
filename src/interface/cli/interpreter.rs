//! 명령 인터프리터.
//! 해석된 명령을 실행하고 결과/오류를 출력 스트림에 그린다.

use std::io::{self, Write};

use tracing::debug;

use crate::application::ports::FetchError;
use crate::application::usecases::list_photos::ListPhotosUseCase;
use crate::domain::command::{Command, ParseError};
use crate::interface::cli::messages;

pub struct Interpreter<'a, W: Write> {
    list_photos: ListPhotosUseCase<'a>,
    out: W,
}

impl<'a, W: Write> Interpreter<'a, W> {
    pub fn new(list_photos: ListPhotosUseCase<'a>, out: W) -> Self {
        Self { list_photos, out }
    }

    /// 출력 스트림을 돌려받는다.
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn show_greeting(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", messages::GREETING)
    }

    pub fn show_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", messages::HELP)
    }

    /// 입력 대기 직전에 호출하므로 즉시 flush한다.
    pub fn show_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", messages::COMMAND_PROMPT)?;
        self.out.flush()
    }

    /// 명령 하나를 실행한다.
    /// 조회 실패는 여기서 문구로 바뀌고, 출력 스트림 오류만 호출자에게 전달된다.
    pub async fn execute(&mut self, command: &Command) -> io::Result<()> {
        debug!(?command, "dispatching command");
        match *command {
            Command::Exit => Ok(()),
            Command::Help => self.show_help(),
            Command::Invalid(ParseError::Unrecognized) => {
                writeln!(self.out, "{}", messages::UNRECOGNIZED_COMMAND)
            }
            Command::Invalid(ParseError::BadArgument) => {
                writeln!(self.out, "{}", messages::INVALID_PHOTO_COMMAND)
            }
            Command::ListPhotos { album_id } => self.print_photos(album_id).await,
        }
    }

    async fn print_photos(&mut self, album_id: Option<u16>) -> io::Result<()> {
        match album_id {
            None => writeln!(self.out, "{}", messages::RETRIEVING_ALL_PHOTOS)?,
            Some(id) => writeln!(self.out, "{}", messages::retrieving_album_photos(id))?,
        }
        // 네트워크 대기 중에도 상태 줄이 보이도록 한다.
        self.out.flush()?;

        let photos = match self.list_photos.execute(album_id).await {
            Ok(Some(photos)) => photos,
            Ok(None) => return writeln!(self.out, "{}", messages::PROBLEM_RESULTS),
            Err(err) => {
                match err {
                    FetchError::Connectivity(_) => {
                        writeln!(self.out, "{}", messages::PROBLEM_NETWORK_CONNECTIVITY)?
                    }
                    FetchError::Timeout(_) => {
                        writeln!(self.out, "{}", messages::PROBLEM_REQUEST_TIMEOUT)?
                    }
                    FetchError::Other(_) => {}
                }
                return writeln!(self.out, "{}", messages::PROBLEM_RESULTS);
            }
        };

        for photo in &photos {
            writeln!(self.out, "{}", photo.list_line())?;
        }
        writeln!(self.out, "{}", messages::returned_results(photos.len()))
    }
}
