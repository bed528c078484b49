// src/main.rs
use clap::Parser;
use name_display::cli::Args;
use name_display::config::Config;
use name_display::error::AppError;
use name_display::logging::setup_logging;
use name_display::{format_initials, format_name};

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle configuration operations without touching the formatter
    if args.list_config {
        Config::display()?;
        return Ok(());
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        let mut config = Config::load().unwrap_or_default();

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save()?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let (log_file_path, _guard) = setup_logging(&args)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = if args.initials {
        format_initials(&args.parts)?
    } else {
        format_name(&args.parts)?
    };

    println!("{result}");
    Ok(())
}
