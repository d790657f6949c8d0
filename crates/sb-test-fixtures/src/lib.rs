use std::fs;
use std::path::PathBuf;

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn storyboards_root() -> PathBuf {
    workspace_root().join("fixtures").join("storyboards")
}

pub fn storyboard_path(name: &str) -> PathBuf {
    storyboards_root().join(format!("{}.storyboard", name))
}

pub fn storyboard_source(name: &str) -> String {
    let path = storyboard_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|error| panic!("fixture {} should be readable: {}", path.display(), error))
}
