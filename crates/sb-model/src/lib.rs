mod color;
mod reusable;
mod scene;
mod segue;
mod storyboard;
mod view_controller;

pub use color::{Color, ColorCatalog, ColorComponents, ColorSpace, CustomColorSpace};
pub use reusable::{Reusable, REUSABLE_KINDS};
pub use scene::Scene;
pub use segue::{Segue, SegueKind};
pub use storyboard::Storyboard;
pub use view_controller::ViewController;
