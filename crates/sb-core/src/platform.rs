use serde::Serialize;

use crate::{swift_string_literal, StoryboardError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Platform {
    #[default]
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "OSX")]
    MacOs,
    #[serde(rename = "tvOS")]
    TvOs,
}

/// One `instantiate<signature>(withIdentifier:)` overload exposed by the
/// platform storyboard type, and the controller type it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantiationInfo {
    pub signature: &'static str,
    pub return_type: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// Name understood by `#if os(...)`.
    pub os_name: &'static str,
    pub target_runtime: &'static str,
    pub framework: &'static str,
    pub storyboard_type: &'static str,
    pub segue_type: &'static str,
    pub storyboard_identifier_type: &'static str,
    pub scene_identifier_type: &'static str,
    pub segue_identifier_type: &'static str,
    pub controller_types: &'static [&'static str],
    pub controller_return_type: &'static str,
    pub controller_signature: &'static str,
    pub instantiation_info: &'static [InstantiationInfo],
    pub view_type: &'static str,
    pub color_type: &'static str,
    pub color_availability: &'static str,
    pub reusable_views: &'static [&'static str],
    /// `instantiateInitial...()` returns an optional that must be unwrapped.
    pub initial_controller_is_optional: bool,
    /// Emit the `UICollectionView` / `UITableView` dequeue and register helpers.
    pub reusable_container_helpers: bool,
    controllers: &'static [(&'static str, &'static str)],
}

const PASS_THROUGH_TAGS: &[&str] = &["exit", "viewControllerPlaceholder"];

const UIKIT_CONTROLLERS: &[(&str, &str)] = &[
    ("viewController", "UIViewController"),
    ("navigationController", "UINavigationController"),
    ("tableViewController", "UITableViewController"),
    ("tabBarController", "UITabBarController"),
    ("splitViewController", "UISplitViewController"),
    ("pageViewController", "UIPageViewController"),
    ("collectionViewController", "UICollectionViewController"),
];

const UIKIT_INSTANTIATION: &[InstantiationInfo] = &[InstantiationInfo {
    signature: "ViewController",
    return_type: "UIViewController",
}];

const UIKIT_REUSABLE_VIEWS: &[&str] = &["UICollectionReusableView", "UITableViewCell"];

static PROFILES: [PlatformProfile; 3] = [
    PlatformProfile {
        platform: Platform::Ios,
        os_name: "iOS",
        target_runtime: "iOS.CocoaTouch",
        framework: "UIKit",
        storyboard_type: "UIStoryboard",
        segue_type: "UIStoryboardSegue",
        storyboard_identifier_type: "String",
        scene_identifier_type: "String",
        segue_identifier_type: "String",
        controller_types: &["UIViewController"],
        controller_return_type: "UIViewController",
        controller_signature: "ViewController",
        instantiation_info: UIKIT_INSTANTIATION,
        view_type: "UIView",
        color_type: "UIColor",
        color_availability: "iOS 11.0",
        reusable_views: UIKIT_REUSABLE_VIEWS,
        initial_controller_is_optional: true,
        reusable_container_helpers: true,
        controllers: UIKIT_CONTROLLERS,
    },
    PlatformProfile {
        platform: Platform::MacOs,
        os_name: "OSX",
        target_runtime: "MacOSX.Cocoa",
        framework: "Cocoa",
        storyboard_type: "NSStoryboard",
        segue_type: "NSStoryboardSegue",
        storyboard_identifier_type: "NSStoryboard.Name",
        scene_identifier_type: "NSStoryboard.SceneIdentifier",
        segue_identifier_type: "NSStoryboardSegue.Identifier",
        controller_types: &["NSViewController", "NSWindowController"],
        // NSViewController or NSWindowController
        controller_return_type: "AnyObject",
        controller_signature: "Controller",
        instantiation_info: &[
            InstantiationInfo {
                signature: "Controller",
                return_type: "NSWindowController",
            },
            InstantiationInfo {
                signature: "Controller",
                return_type: "NSViewController",
            },
        ],
        view_type: "NSView",
        color_type: "NSColor",
        color_availability: "OSX 10.13",
        reusable_views: &[],
        initial_controller_is_optional: false,
        reusable_container_helpers: false,
        controllers: &[
            ("viewController", "NSViewController"),
            ("windowController", "NSWindowController"),
            ("pagecontroller", "NSPageController"),
            ("tabViewController", "NSTabViewController"),
            ("splitViewController", "NSSplitViewController"),
        ],
    },
    PlatformProfile {
        platform: Platform::TvOs,
        os_name: "tvOS",
        target_runtime: "AppleTV",
        framework: "UIKit",
        storyboard_type: "UIStoryboard",
        segue_type: "UIStoryboardSegue",
        storyboard_identifier_type: "String",
        scene_identifier_type: "String",
        segue_identifier_type: "String",
        controller_types: &["UIViewController"],
        controller_return_type: "UIViewController",
        controller_signature: "ViewController",
        instantiation_info: UIKIT_INSTANTIATION,
        view_type: "UIView",
        color_type: "UIColor",
        color_availability: "tvOS 11.0",
        reusable_views: UIKIT_REUSABLE_VIEWS,
        initial_controller_is_optional: true,
        reusable_container_helpers: true,
        controllers: UIKIT_CONTROLLERS,
    },
];

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::MacOs, Platform::TvOs];

    pub fn from_target_runtime(target_runtime: &str) -> Result<Self, StoryboardError> {
        if target_runtime == "iOS.CocoaTouch.iPad" {
            return Ok(Platform::Ios);
        }

        Self::ALL
            .into_iter()
            .find(|platform| platform.profile().target_runtime == target_runtime)
            .ok_or_else(|| {
                StoryboardError::new(
                    "PLATFORM_UNSUPPORTED",
                    format!("Unsupported targetRuntime \"{}\".", target_runtime),
                )
            })
    }

    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::Ios => &PROFILES[0],
            Platform::MacOs => &PROFILES[1],
            Platform::TvOs => &PROFILES[2],
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.profile().os_name)
    }
}

impl PlatformProfile {
    /// Concrete controller type for a scene element tag. Placeholder tags map
    /// to `None` silently; unknown tags are reported and also map to `None`.
    pub fn controller_type(&self, tag: &str) -> Option<&'static str> {
        if PASS_THROUGH_TAGS.contains(&tag) {
            return None;
        }

        let found = self
            .controllers
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, type_name)| *type_name);
        if found.is_none() {
            log::warn!(
                "Unknown controller element <{}> for {} storyboard.",
                tag,
                self.os_name
            );
        }
        found
    }

    /// Swift expression constructing an identifier of `type_name` from `value`.
    pub fn identifier_literal(type_name: &str, value: &str) -> String {
        let literal = swift_string_literal(value);
        if type_name == "String" {
            literal
        } else {
            format!("{}({})", type_name, literal)
        }
    }
}
