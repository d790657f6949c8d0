use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;

use clap::Parser;
use sb_core::StoryboardError;
use sb_model::Storyboard;

mod cli_args;
mod error_map;
mod source_loader;

pub(crate) use cli_args::{Cli, EmitKind};
pub(crate) use error_map::{
    emit_error, map_cli_model_json, map_cli_output_write, map_cli_source_path,
    map_cli_source_read, map_cli_source_scan,
};
pub(crate) use source_loader::load_storyboards;
#[cfg(test)]
pub(crate) use source_loader::{discover_storyboard_files, read_storyboard, resolve_source_path};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            // help and version land on stdout, usage errors on stderr
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(&error),
    }
}

fn run(cli: Cli) -> Result<i32, StoryboardError> {
    let storyboards = load_storyboards(&cli.path)?;
    log::debug!(
        "Loaded {} storyboard(s) from {}.",
        storyboards.len(),
        cli.path.display()
    );

    let rendered = render(cli.emit, &storyboards)?;
    write_output(cli.output.as_deref(), &rendered)?;
    Ok(0)
}

fn render(emit: EmitKind, storyboards: &[Storyboard]) -> Result<String, StoryboardError> {
    match emit {
        EmitKind::Swift => Ok(sb_codegen::generate(storyboards)),
        EmitKind::Model => {
            let mut json = serde_json::to_string_pretty(storyboards).map_err(map_cli_model_json)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), StoryboardError> {
    let Some(path) = output else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(map_cli_output_write)?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(map_cli_output_write)?;
    }
    fs::write(path, content).map_err(map_cli_output_write)
}
