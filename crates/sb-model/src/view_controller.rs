use sb_core::PlatformProfile;
use sb_parser::XmlElementNode;
use serde::Serialize;

use crate::Reusable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewController {
    /// Element tag, e.g. `navigationController`.
    pub element_name: String,
    pub id: Option<String>,
    pub custom_class: Option<String>,
    pub custom_module: Option<String>,
    pub custom_module_provider: Option<String>,
    pub storyboard_identifier: Option<String>,
    pub user_label: Option<String>,
    /// `custom_class`, or the platform type for `element_name`.
    pub controller_class: Option<String>,
    pub reusables: Vec<Reusable>,
}

impl ViewController {
    pub fn from_element(node: &XmlElementNode, profile: &PlatformProfile) -> Self {
        let attr = |name: &str| node.non_empty_attr(name).map(str::to_string);

        Self {
            element_name: node.name.clone(),
            id: attr("id"),
            custom_class: attr("customClass"),
            custom_module: attr("customModule"),
            custom_module_provider: attr("customModuleProvider"),
            storyboard_identifier: attr("storyboardIdentifier"),
            user_label: attr("userLabel"),
            controller_class: resolve_controller_class(node, profile),
            reusables: node
                .find_all_by_attribute("reuseIdentifier", None)
                .into_iter()
                .map(Reusable::from_element)
                .collect(),
        }
    }

    /// Reusables that generate a `Reusable` enum case.
    pub fn identified_reusables(&self) -> impl Iterator<Item = &Reusable> {
        self.reusables
            .iter()
            .filter(|reusable| reusable.reuse_identifier.is_some())
    }
}

/// Prefers an explicit `customClass` over the tag-derived platform type.
pub(crate) fn resolve_controller_class(
    node: &XmlElementNode,
    profile: &PlatformProfile,
) -> Option<String> {
    if let Some(custom_class) = node.non_empty_attr("customClass") {
        return Some(custom_class.to_string());
    }
    profile.controller_type(&node.name).map(str::to_string)
}
