use sb_core::{PlatformProfile, StoryboardError};
use sb_parser::XmlElementNode;
use serde::{Serialize, Serializer};

use crate::view_controller::resolve_controller_class;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegueKind {
    Relationship,
    Show,
    Presentation,
    Embed,
    Unwind,
    Push,
    Modal,
    Popover,
    Replace,
    Custom,
    /// A kind outside the known vocabulary, kept verbatim.
    Other(String),
}

impl SegueKind {
    pub const KNOWN: [SegueKind; 10] = [
        SegueKind::Relationship,
        SegueKind::Show,
        SegueKind::Presentation,
        SegueKind::Embed,
        SegueKind::Unwind,
        SegueKind::Push,
        SegueKind::Modal,
        SegueKind::Popover,
        SegueKind::Replace,
        SegueKind::Custom,
    ];

    pub fn parse(raw: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .unwrap_or_else(|| SegueKind::Other(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            SegueKind::Relationship => "relationship",
            SegueKind::Show => "show",
            SegueKind::Presentation => "presentation",
            SegueKind::Embed => "embed",
            SegueKind::Unwind => "unwind",
            SegueKind::Push => "push",
            SegueKind::Modal => "modal",
            SegueKind::Popover => "popover",
            SegueKind::Replace => "replace",
            SegueKind::Custom => "custom",
            SegueKind::Other(raw) => raw,
        }
    }
}

impl Serialize for SegueKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segue {
    pub id: Option<String>,
    pub kind: SegueKind,
    /// `None` for anonymous segues; an empty attribute counts as absent.
    pub identifier: Option<String>,
    pub destination: Option<String>,
    /// Class of the destination scene, when the reference resolves.
    pub destination_class: Option<String>,
}

impl Segue {
    pub fn from_element(
        node: &XmlElementNode,
        document_root: &XmlElementNode,
        profile: &PlatformProfile,
    ) -> Result<Self, StoryboardError> {
        let Some(kind) = node.attr("kind") else {
            return Err(StoryboardError::with_span(
                "SEGUE_KIND_MISSING",
                "Missing required attribute \"kind\" on <segue>.",
                node.location.clone(),
            ));
        };

        let destination = node.non_empty_attr("destination").map(str::to_string);
        let destination_class = destination.as_deref().and_then(|id| {
            document_root
                .find_by_id(id)
                .first()
                .and_then(|target| resolve_controller_class(target, profile))
        });
        if let (Some(destination), None) = (&destination, &destination_class) {
            log::debug!("Segue destination \"{}\" has no resolvable class.", destination);
        }

        Ok(Self {
            id: node.non_empty_attr("id").map(str::to_string),
            kind: SegueKind::parse(kind),
            identifier: node.non_empty_attr("identifier").map(str::to_string),
            destination,
            destination_class,
        })
    }
}
