use std::fs;
use std::path::{Path, PathBuf};

use sb_core::StoryboardError;
use sb_model::Storyboard;
use walkdir::WalkDir;

use crate::{map_cli_source_path, map_cli_source_read, map_cli_source_scan};

const STORYBOARD_EXTENSION: &str = "storyboard";

/// Loads every storyboard under `path`, skipping files that fail on their own.
///
/// Only an unsupported platform aborts the whole load.
pub(crate) fn load_storyboards(path: &Path) -> Result<Vec<Storyboard>, StoryboardError> {
    let source = resolve_source_path(path)?;
    let files = if source.is_dir() {
        discover_storyboard_files(&source)?
    } else {
        vec![source]
    };

    let mut storyboards = Vec::new();
    for file in files {
        match read_storyboard(&file) {
            Ok(storyboard) => storyboards.push(storyboard),
            Err(error) if error.is_run_fatal() => {
                return Err(StoryboardError {
                    message: format!("{}: {}", file.display(), error.message),
                    ..error
                });
            }
            Err(error) if is_unreadable(&error) => {
                log::debug!("Skipping {}: {}", file.display(), error);
            }
            Err(error) => {
                log::error!("Skipping {}: {}", file.display(), error);
            }
        }
    }
    Ok(storyboards)
}

pub(crate) fn resolve_source_path(path: &Path) -> Result<PathBuf, StoryboardError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(map_cli_source_path)?
            .join(path)
    };

    if !absolute.exists() {
        return Err(StoryboardError::new(
            "CLI_SOURCE_NOT_FOUND",
            format!("Path does not exist: {}", absolute.display()),
        ));
    }

    if absolute.is_file() && !has_storyboard_extension(&absolute) {
        return Err(StoryboardError::new(
            "CLI_SOURCE_INVALID",
            format!(
                "Expected a .{} file or a directory: {}",
                STORYBOARD_EXTENSION,
                absolute.display()
            ),
        ));
    }

    Ok(absolute)
}

/// Recursively lists `.storyboard` files, sorted by path for stable output.
///
/// Only an unreadable root fails; entries below it that cannot be read are
/// skipped.
pub(crate) fn discover_storyboard_files(root: &Path) -> Result<Vec<PathBuf>, StoryboardError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if error.depth() > 0 => {
                log::debug!("Skipping unreadable entry: {}", error);
                continue;
            }
            Err(error) => return Err(map_cli_source_scan(error)),
        };
        if entry.file_type().is_file() && has_storyboard_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

pub(crate) fn read_storyboard(path: &Path) -> Result<Storyboard, StoryboardError> {
    let source = fs::read_to_string(path).map_err(map_cli_source_read)?;
    Storyboard::parse(&storyboard_name(path), &source)
}

fn storyboard_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_storyboard_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == STORYBOARD_EXTENSION)
}

fn is_unreadable(error: &StoryboardError) -> bool {
    matches!(
        error.code.as_str(),
        "CLI_SOURCE_READ" | "XML_PARSE_ERROR" | "STORYBOARD_ROOT_INVALID"
    )
}
