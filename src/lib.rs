//! photo-album library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use std::io;

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::{AppComposition, CliAction, Invocation, run_once, run_repl};

/// 라이브러리 직접 호출용 실행 함수.
/// 표준 입출력에 연결된 인터프리터를 실행 모드에 맞게 구동한다.
pub async fn run(invocation: Invocation) -> Result<()> {
    let composition = AppComposition::load(&invocation.overrides)?;
    let stdout = io::stdout();
    let mut interpreter = composition.interpreter(stdout.lock());

    match invocation.action {
        CliAction::Interactive => run_repl(&mut interpreter, io::stdin().lock()).await?,
        CliAction::RunOnce(args) => run_once(&mut interpreter, &args).await?,
    }

    Ok(())
}
