// src/config.rs
use readability_domain::SentinelPolicy;
use readability_ports::text_source::TextSourcePlan;

use crate::cli::Args;

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

/// Runtime configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub plan: TextSourcePlan,
    /// Preset selection; `None` prompts on the console.
    pub selection: Option<String>,
    pub average: SentinelPolicy,
    pub format: OutputFormat,
    pub echo_text: bool,
    pub verbosity: u8,
}

impl Config {
    pub fn is_interactive(&self) -> bool {
        self.selection.is_none()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            plan: TextSourcePlan::new(args.file).with_line_join(args.line_join.into()),
            selection: args.score,
            average: args.average.into(),
            format: args.format.into(),
            echo_text: !args.no_echo,
            verbosity: args.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use readability_ports::text_source::LineJoin;

    use super::*;

    #[test]
    fn builds_from_args() {
        let args = Args::parse_from(["readability", "--line-join", "keep", "--no-echo", "doc.txt"]);
        let config = Config::from(args);
        assert_eq!(config.plan.path, std::path::PathBuf::from("doc.txt"));
        assert_eq!(config.plan.line_join, LineJoin::Keep);
        assert!(config.is_interactive());
        assert!(!config.echo_text);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.average, SentinelPolicy::Reference);
    }

    #[test]
    fn score_flag_disables_prompt() {
        let config = Config::from(Args::parse_from(["readability", "-s", "all", "doc.txt"]));
        assert!(!config.is_interactive());
        assert_eq!(config.selection.as_deref(), Some("all"));
    }
}
