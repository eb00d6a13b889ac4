use clap::ValueEnum;
use readability_domain::SentinelPolicy;
use readability_ports::text_source::LineJoin;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            #[cfg(feature = "yaml")]
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliLineJoin {
    Space,
    None,
    Keep,
}

impl From<CliLineJoin> for LineJoin {
    fn from(value: CliLineJoin) -> Self {
        match value {
            CliLineJoin::Space => LineJoin::Space,
            CliLineJoin::None => LineJoin::Concatenate,
            CliLineJoin::Keep => LineJoin::Keep,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliAveragePolicy {
    Reference,
    Exclude,
}

impl From<CliAveragePolicy> for SentinelPolicy {
    fn from(value: CliAveragePolicy) -> Self {
        match value {
            CliAveragePolicy::Reference => SentinelPolicy::Reference,
            CliAveragePolicy::Exclude => SentinelPolicy::Exclude,
        }
    }
}
