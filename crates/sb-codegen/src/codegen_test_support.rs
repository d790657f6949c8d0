use sb_model::Storyboard;

use crate::storyboards::write_storyboard;
use crate::writer::SwiftWriter;

pub(crate) fn render_storyboard(name: &str, source: &str) -> String {
    let storyboard = Storyboard::parse(name, source).expect("storyboard should parse");
    let mut writer = SwiftWriter::new();
    write_storyboard(&mut writer, &storyboard);
    writer.finish()
}
