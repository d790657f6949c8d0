use sb_parser::XmlElementNode;
use serde::Serialize;

/// Element tags with a matching `ReusableKind` case in generated code.
pub const REUSABLE_KINDS: [&str; 2] = ["tableViewCell", "collectionViewCell"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reusable {
    /// Tag name of the element, e.g. `tableViewCell`.
    pub kind: String,
    pub reuse_identifier: Option<String>,
    pub custom_class: Option<String>,
}

impl Reusable {
    pub fn from_element(node: &XmlElementNode) -> Self {
        Self {
            kind: node.name.clone(),
            reuse_identifier: node.non_empty_attr("reuseIdentifier").map(str::to_string),
            custom_class: node.non_empty_attr("customClass").map(str::to_string),
        }
    }
}
