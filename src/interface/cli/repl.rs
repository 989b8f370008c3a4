//! 대화형 쉘(REPL)과 단발 실행 루프.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::domain::command::Command;
use crate::interface::cli::interpreter::Interpreter;

/// 인사말과 도움말을 한 번 보여준 뒤 `exit`까지 명령을 반복 처리한다.
/// 입력이 끝나면(EOF) `exit`와 동일하게 종료한다.
pub async fn run_repl<W: Write, R: BufRead>(
    interpreter: &mut Interpreter<'_, W>,
    mut input: R,
) -> io::Result<()> {
    interpreter.show_greeting()?;
    interpreter.show_help()?;

    let mut buf = Vec::new();
    loop {
        interpreter.show_prompt()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("input closed, leaving interactive shell");
            break;
        }

        // UTF-8이 아닌 입력도 세션을 끝내지 않고 알 수 없는 명령으로 처리한다.
        let line = String::from_utf8_lossy(&buf);
        let command = Command::parse_line(&line);
        if command.is_exit() {
            break;
        }
        interpreter.execute(&command).await?;
    }

    Ok(())
}

/// 명령행 인자를 한 줄의 명령으로 보고 한 번만 실행한다.
/// 결과와 상관없이 곧바로 반환한다.
pub async fn run_once<W: Write, S: AsRef<str>>(
    interpreter: &mut Interpreter<'_, W>,
    args: &[S],
) -> io::Result<()> {
    // 인자 하나에 공백이 섞여 있어도(`"photo-album 1"`) 대화형 입력과 같게 나눈다.
    let tokens: Vec<&str> = args
        .iter()
        .flat_map(|arg| arg.as_ref().split_whitespace())
        .collect();
    interpreter.execute(&Command::parse(&tokens)).await
}
