use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "sbgen", version)]
#[command(about = "Generate Swift accessors from Interface Builder storyboards")]
pub(crate) struct Cli {
    /// A `.storyboard` file, or a directory searched recursively.
    #[arg(value_name = "PATH")]
    pub(crate) path: PathBuf,
    #[arg(long = "emit", value_enum, default_value_t = EmitKind::Swift)]
    pub(crate) emit: EmitKind,
    /// Write to this file instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum EmitKind {
    /// Swift source.
    Swift,
    /// The extracted storyboard model as JSON.
    Model,
}
