mod cli;
use cli::{parse_cli_mode, run, usage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", usage());
            return Ok(());
        }
    };

    run(mode).await
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("rto-track"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "rto-track.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("rto-track started");
}
