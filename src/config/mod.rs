use crate::domain::model::EofPolicy;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "shuffle-console")]
#[command(about = "Interactive guide to the content shuffling system")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// What to do when standard input ends before 'stop'
    #[arg(long, value_enum, default_value_t = EofPolicy::Fail)]
    pub on_eof: EofPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let config = CliConfig::try_parse_from(["shuffle-console"]).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.on_eof, EofPolicy::Fail);
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::try_parse_from([
            "shuffle-console",
            "-v",
            "--log-format",
            "json",
            "--on-eof",
            "stop",
        ])
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.on_eof, EofPolicy::Stop);
    }

    #[test]
    fn test_rejects_unknown_eof_policy() {
        assert!(CliConfig::try_parse_from(["shuffle-console", "--on-eof", "retry"]).is_err());
    }
}
