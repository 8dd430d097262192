use clap::Parser;
use nhl_stats::cli::Args;
use nhl_stats::commands::{
    USAGE, handle_config_update_command, handle_list_config_command, run_report, validate_args,
};
use nhl_stats::config::Config;
use nhl_stats::error::AppError;
use nhl_stats::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    validate_args(&args)?;

    // Config operations run without logging or network
    if args.list_config {
        return handle_list_config_command().await;
    }
    if args.is_config_command() {
        return handle_config_update_command(&args).await;
    }

    let Some(report) = args.report() else {
        print!("{USAGE}");
        return Ok(());
    };

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    config.validate()?;

    let result = run_report(report, &args, &config).await;
    if let Err(e) = &result {
        tracing::error!("{:?} failed: {}", report, e);
    }
    result
}
