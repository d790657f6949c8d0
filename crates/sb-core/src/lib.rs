pub mod error;
pub mod identifier;
pub mod platform;
pub mod types;

pub use error::StoryboardError;
pub use identifier::{swift_identifier, swift_string_literal, FirstLetter};
pub use platform::{InstantiationInfo, Platform, PlatformProfile};
pub use types::*;
