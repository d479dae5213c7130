use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "closest",
    about = "Find the closest file or pattern in the current or parent directories",
    override_usage = "closest [options] [pattern]",
    help_template = "{usage-heading} {usage}\n\n{about-with-newline}\n{all-args}",
    disable_version_flag = true
)]
pub struct Options {
    /// File name, or regex with -r, to look for
    pub pattern: Option<String>,

    /// Search all files up to the root instead of stopping at the first match
    #[arg(short = 'a', long = "all")]
    pub search_all: bool,

    /// Use regex pattern for matching entry names
    #[arg(short = 'r', long = "regex")]
    pub use_regex: bool,

    /// Show version
    #[arg(short = 'v', long = "version")]
    pub show_version: bool,

    /// Log each visited directory to stderr
    #[arg(short = 'd', long)]
    pub debug: bool,
}
