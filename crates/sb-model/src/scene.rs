use sb_core::{PlatformProfile, StoryboardError};
use sb_parser::XmlElementNode;
use serde::Serialize;

use crate::{Segue, ViewController};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub scene_id: String,
    pub view_controller: Option<ViewController>,
    pub segues: Vec<Segue>,
}

impl Scene {
    pub fn from_element(
        node: &XmlElementNode,
        document_root: &XmlElementNode,
        profile: &PlatformProfile,
    ) -> Result<Self, StoryboardError> {
        // the first scene member is authoritative
        let view_controller = node
            .find_all_by_attribute("sceneMemberID", Some("viewController"))
            .first()
            .map(|element| ViewController::from_element(element, profile));

        let segues = node
            .find_all_named("segue")
            .into_iter()
            .map(|element| Segue::from_element(element, document_root, profile))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            scene_id: node.attr("sceneID").unwrap_or_default().to_string(),
            view_controller,
            segues,
        })
    }

    pub fn custom_module(&self) -> Option<&str> {
        self.view_controller.as_ref()?.custom_module.as_deref()
    }

    pub fn custom_module_provider(&self) -> Option<&str> {
        self.view_controller.as_ref()?.custom_module_provider.as_deref()
    }

    /// Segues that generate a `Segue` enum case.
    pub fn identified_segues(&self) -> impl Iterator<Item = &Segue> {
        self.segues.iter().filter(|segue| segue.identifier.is_some())
    }
}
