mod index;
mod xml;

pub use index::{Descendants, Lookup};
pub use xml::{parse_xml_document, XmlDocument, XmlElementNode};
