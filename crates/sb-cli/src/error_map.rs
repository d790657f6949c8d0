use std::fmt::Display;

use sb_core::StoryboardError;

fn map_error(code: &'static str, error: impl Display) -> StoryboardError {
    StoryboardError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: &StoryboardError) -> i32 {
    eprintln!("RESULT:ERROR");
    eprintln!("ERROR_CODE:{}", error.code);
    eprintln!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
    );
    if let Some(span) = &error.span {
        eprintln!("ERROR_AT:{}:{}", span.start.line, span.start.column);
    }
    1
}

pub(crate) fn map_cli_source_path(error: std::io::Error) -> StoryboardError {
    map_error("CLI_SOURCE_PATH", error)
}

pub(crate) fn map_cli_source_scan(error: walkdir::Error) -> StoryboardError {
    map_error("CLI_SOURCE_SCAN", error)
}

pub(crate) fn map_cli_source_read(error: std::io::Error) -> StoryboardError {
    map_error("CLI_SOURCE_READ", error)
}

pub(crate) fn map_cli_output_write(error: std::io::Error) -> StoryboardError {
    map_error("CLI_OUTPUT_WRITE", error)
}

pub(crate) fn map_cli_model_json(error: serde_json::Error) -> StoryboardError {
    map_error("CLI_MODEL_JSON", error)
}
