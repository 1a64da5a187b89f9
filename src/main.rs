use deployenv::AppError;
use deployenv::adapters::TerminalState;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    // Ctrl-C outside dialoguer's raw-mode reads (e.g. password entry) lands here,
    // possibly with echo still switched off.
    let terminal = TerminalState::capture();
    if let Err(err) = ctrlc::set_handler(move || {
        terminal.restore();
        println!("\n{}", AppError::Interrupted);
        std::process::exit(AppError::Interrupted.exit_code());
    }) {
        tracing::warn!(error = %err, "failed to install Ctrl-C handler");
    }

    deployenv::app::cli::run();
}
