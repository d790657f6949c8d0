use std::collections::BTreeSet;

use sb_core::{Platform, PlatformProfile, StoryboardError};
use sb_parser::{parse_xml_document, XmlDocument};
use serde::Serialize;

use crate::view_controller::resolve_controller_class;
use crate::{Color, Scene};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Storyboard {
    /// File base name without the `.storyboard` extension.
    pub name: String,
    pub version: String,
    pub platform: Platform,
    pub initial_view_controller_class: Option<String>,
    pub scenes: Vec<Scene>,
    /// Modules that need an `import`; provider-supplied modules are excluded.
    pub custom_modules: BTreeSet<String>,
    pub colors: Vec<Color>,
}

impl Storyboard {
    pub fn parse(name: &str, source: &str) -> Result<Self, StoryboardError> {
        let document = parse_xml_document(source)?;
        Self::from_document(name, &document)
    }

    pub fn from_document(name: &str, document: &XmlDocument) -> Result<Self, StoryboardError> {
        let root = &document.root;
        if root.name != "document" {
            return Err(StoryboardError::with_span(
                "STORYBOARD_ROOT_INVALID",
                format!("Expected <document> root in \"{}\", got <{}>.", name, root.name),
                root.location.clone(),
            ));
        }

        let Some(version) = root.attr("version") else {
            return Err(StoryboardError::with_span(
                "STORYBOARD_VERSION_MISSING",
                format!("Missing required attribute \"version\" in \"{}\".", name),
                root.location.clone(),
            ));
        };

        let platform = match root.attr("targetRuntime") {
            Some(target_runtime) => Platform::from_target_runtime(target_runtime)?,
            None => Platform::default(),
        };
        let profile = platform.profile();

        let initial_view_controller_class = root
            .non_empty_attr("initialViewController")
            .and_then(|id| root.find_by_id(id).first())
            .and_then(|element| resolve_controller_class(element, profile));

        let scenes = root
            .find_all_by_attribute("sceneID", None)
            .into_iter()
            .map(|element| Scene::from_element(element, root, profile))
            .collect::<Result<Vec<_>, _>>()?;

        let custom_modules = scenes
            .iter()
            .filter(|scene| scene.custom_module_provider().is_none())
            .filter_map(|scene| scene.custom_module().map(str::to_string))
            .collect();

        let colors = root
            .find_all_named("color")
            .into_iter()
            .map(Color::from_element)
            .collect();

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            platform,
            initial_view_controller_class,
            scenes,
            custom_modules,
            colors,
        })
    }

    pub fn profile(&self) -> &'static PlatformProfile {
        self.platform.profile()
    }
}
