use sb_parser::XmlElementNode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorCatalog {
    System,
}

impl ColorCatalog {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "System" => Some(ColorCatalog::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorSpace {
    Catalog,
    Custom,
}

impl ColorSpace {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "catalog" => Some(ColorSpace::Catalog),
            "custom" => Some(ColorSpace::Custom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CustomColorSpace {
    #[serde(rename = "sRGB")]
    Srgb,
    #[serde(rename = "displayP3")]
    DisplayP3,
    #[serde(rename = "calibratedRGB")]
    CalibratedRgb,
    #[serde(rename = "calibratedWhite")]
    CalibratedWhite,
    #[serde(rename = "genericGamma22GrayColorSpace")]
    GenericGamma22Gray,
}

impl CustomColorSpace {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "sRGB" => Some(CustomColorSpace::Srgb),
            "displayP3" => Some(CustomColorSpace::DisplayP3),
            "calibratedRGB" => Some(CustomColorSpace::CalibratedRgb),
            "calibratedWhite" => Some(CustomColorSpace::CalibratedWhite),
            "genericGamma22GrayColorSpace" => Some(CustomColorSpace::GenericGamma22Gray),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorComponents {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub key: Option<String>,
    pub asset_name: Option<String>,
    pub catalog: Option<ColorCatalog>,
    pub color_space: Option<ColorSpace>,
    pub custom_color_space: Option<CustomColorSpace>,
    pub red: Option<f64>,
    pub green: Option<f64>,
    pub blue: Option<f64>,
    pub alpha: Option<f64>,
}

impl Color {
    pub fn from_element(node: &XmlElementNode) -> Self {
        let component = |name: &str| {
            node.attr(name)
                .and_then(|raw| raw.trim().parse::<f64>().ok())
        };

        Self {
            key: node.non_empty_attr("key").map(str::to_string),
            asset_name: node.non_empty_attr("name").map(str::to_string),
            catalog: node.attr("catalog").and_then(ColorCatalog::parse),
            color_space: node.attr("colorSpace").and_then(ColorSpace::parse),
            custom_color_space: node.attr("customColorSpace").and_then(CustomColorSpace::parse),
            red: component("red"),
            green: component("green"),
            blue: component("blue"),
            alpha: component("alpha"),
        }
    }

    /// All four components, or `None` when any one is missing.
    pub fn components(&self) -> Option<ColorComponents> {
        Some(ColorComponents {
            red: self.red?,
            green: self.green?,
            blue: self.blue?,
            alpha: self.alpha?,
        })
    }

    /// Name of a color asset from the app's catalogs; system colors excluded.
    pub fn named_asset(&self) -> Option<&str> {
        match self.catalog {
            Some(ColorCatalog::System) => None,
            None => self.asset_name.as_deref(),
        }
    }
}
