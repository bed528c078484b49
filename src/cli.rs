use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation is a configuration operation rather than a
/// formatting request. Config operations run and exit without requiring
/// name parts on the command line.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_log_file_path.is_some() || args.clear_log_file_path || args.list_config
}

/// Culture-aware personal name formatter
///
/// Formats personal names for display, reconciling two cultural
/// conventions: Latin-script naming (given name(s) then surname,
/// space-separated) and CJK naming (surname then given name, no
/// separator). Name parts are always supplied in the order: primary given
/// name, additional given name(s), surname - the surname-first CJK
/// ordering is applied on output.
///
/// Examples:
///   name_display Eric Louis Morris     -> "Eric Louis Morris"
///   name_display 晓东 李               -> "李晓东"
///   name_display --initials Eric Morris -> "EM"
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Name parts in order: given name(s) first, surname last. At least
    /// two parts are required.
    #[arg(value_name = "PART")]
    pub parts: Vec<String>,

    /// Print the compact initials form instead of the full name.
    /// Latin: first letter of every part, upper-cased. CJK: the family name.
    #[arg(short = 'i', long = "initials", help_heading = "Display Options")]
    pub initials: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which echoes log output to stdout in addition to
    /// the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_and_initials_flag() {
        let args = Args::parse_from(["name_display", "-i", "Eric", "Morris"]);
        assert!(args.initials);
        assert_eq!(args.parts, vec!["Eric", "Morris"]);
    }

    #[test]
    fn test_config_operation_detection() {
        let args = Args::parse_from(["name_display", "--list-config"]);
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["name_display", "Eric", "Morris"]);
        assert!(!is_config_operation(&args));
    }
}
