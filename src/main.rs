//! `photo-album` 바이너리 진입점.

use photo_album::interface::cli::Cli;

#[tokio::main]
async fn main() {
    // 명령 출력과 섞이지 않도록 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let invocation = Cli::parse_invocation();

    if let Err(err) = photo_album::run(invocation).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
