use crate::widgets::Terminal;
use std::io::{IsTerminal, Write};

#[macro_use]
mod macros;

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod helper;
pub mod logger;
pub mod render;
pub mod system;
pub mod ui;
pub mod widgets;

mod views;

pub use cli::Args;

#[tokio::main]
async fn main() {
    let bin_name = std::env::args()
        .next()
        .unwrap_or_else(|| "stonks".to_string());

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err.message);
            std::process::exit(err.code);
        }
    };

    let args = match command {
        cli::Command::Help => {
            println!("{}", cli::help_text(&bin_name));
            return;
        }
        cli::Command::Version => {
            println!("{}", cli::version_text());
            return;
        }
        cli::Command::Run(args) => args,
    };

    dotenvy::dotenv().ok();

    if !std::io::stdout().is_terminal() {
        eprintln!("stonks-terminal must run in an interactive terminal (TTY).");
        std::process::exit(1);
    }

    let missing_env = config::missing_required_env(args.base_url.as_deref());
    if !missing_env.is_empty() {
        config::print_config_guide();
        eprintln!("\nmissing required environment variable: {}", missing_env.join(", "));
        std::process::exit(2);
    }
    let run_config = config::load(&args);

    // Initialize logger
    let _guard = logger::init();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id(),
        base_url = %run_config.base_url,
        log_dir = %logger::active_log_dir().display(),
        "application started"
    );

    if let Err(err) = api::client::init(&run_config.base_url) {
        eprintln!("\nfailed to initialize the API client: {err}");
        tracing::error!(error = %err, "API client initialization failed");
        std::process::exit(2);
    }

    // Set up panic hook to restore terminal
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        Terminal::exit_full_screen();
        hook(info);
    }));

    // Flush residual output before switching to the alternate screen
    let _ = std::io::stdout().write_all(b"\n");
    let _ = std::io::stdout().flush();

    Terminal::enter_full_screen();
    tokio::select! {
        _ = app::run(run_config) => {
            tracing::info!("main loop exited");
        }
        _ = wait_for_shutdown_signal() => {
            tracing::warn!("shutdown signal received, exiting");
        }
    }
    Terminal::exit_full_screen();
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use std::future::pending;
    use tokio::signal::unix::{signal, Signal, SignalKind};

    async fn recv_or_pending(signal: Option<Signal>) {
        let mut signal = signal;
        if let Some(sig) = signal.as_mut() {
            let _ = sig.recv().await;
            return;
        }
        pending::<()>().await;
    }

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = recv_or_pending(signal(SignalKind::terminate()).ok()) => {}
        _ = recv_or_pending(signal(SignalKind::hangup()).ok()) => {}
        _ = recv_or_pending(signal(SignalKind::interrupt()).ok()) => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
