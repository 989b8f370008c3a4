//! CLI 인터페이스 모듈 묶음.
//! 명령행 파싱/인터프리터/REPL/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod interpreter;
pub mod messages;
pub mod repl;

pub use command::{Cli, CliAction, Invocation};
pub use composition::AppComposition;
pub use interpreter::Interpreter;
pub use repl::{run_once, run_repl};
