use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rubric", about = "Check submitted answers against an answer specification", version)]
pub struct Cli {
    /// Compact answer description as JSON, e.g. '["Number", "11/10"]'
    #[arg(short, long, value_name = "JSON", required_unless_present = "answer_file")]
    pub answer: Option<String>,

    /// Read the compact answer description from a file
    #[arg(short = 'f', long, value_name = "PATH", conflicts_with = "answer")]
    pub answer_file: Option<PathBuf>,

    /// Parse each candidate as JSON instead of taking it as text
    #[arg(long)]
    pub json: bool,

    /// Per-call match option, e.g. digits=3 or rangemode=exclusive
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Fail on unknown match modes instead of using the default
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log construction and matching decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Submitted answers to check
    #[arg(required = true, allow_hyphen_values = true)]
    pub candidates: Vec<String>,
}
