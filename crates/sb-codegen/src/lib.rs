//! Swift source generation for parsed storyboards.
//!
//! Output is grouped by platform. Each group gets its own scaffolding, one
//! `Storyboards.<Name>` struct per file and one extension block per distinct
//! custom view controller class. When files target more than one platform,
//! every group is wrapped in an `#if os(...)` guard.

mod scaffolding;
mod storyboards;
mod view_controllers;
mod writer;

#[cfg(test)]
mod codegen_test_support;

use sb_core::Platform;
use sb_model::Storyboard;

use writer::SwiftWriter;

pub fn generate(storyboards: &[Storyboard]) -> String {
    let groups = Platform::ALL
        .into_iter()
        .map(|platform| {
            let group = storyboards
                .iter()
                .filter(|storyboard| storyboard.platform == platform)
                .collect::<Vec<_>>();
            (platform, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect::<Vec<_>>();
    let guarded = groups.len() > 1;

    let mut output = String::new();
    for (platform, group) in groups {
        log::debug!("Generating {} storyboard(s) for {}.", group.len(), platform);
        if guarded {
            output.push_str(&format!("#if os({})\n", platform));
        }
        output.push_str(&generate_platform(platform, &group));
        if guarded {
            output.push_str("#endif\n");
        }
    }
    output
}

/// Generates one unguarded block for `group`, which must all target `platform`.
pub fn generate_platform(platform: Platform, group: &[&Storyboard]) -> String {
    let profile = platform.profile();
    let mut w = SwiftWriter::new();

    scaffolding::write_header(&mut w, profile, group);
    scaffolding::write_storyboard_extension(&mut w, profile);
    w.block("struct Storyboards", |w| {
        for storyboard in group {
            storyboards::write_storyboard(w, storyboard);
        }
    });
    w.blank();
    scaffolding::write_kinds(&mut w);
    scaffolding::write_protocols(&mut w, profile);
    scaffolding::write_conformances(&mut w, profile);
    scaffolding::write_reusable_container_helpers(&mut w, profile);
    scaffolding::write_colors(&mut w, profile, group);
    view_controllers::write_view_controllers(&mut w, profile, group);

    w.finish()
}

#[cfg(test)]
mod generate_tests {
    use super::*;
    use sb_test_fixtures::storyboard_source;

    fn parse(name: &str) -> Storyboard {
        Storyboard::parse(name, &storyboard_source(name)).expect("fixture should parse")
    }

    #[test]
    fn no_storyboards_generate_nothing() {
        assert_eq!(generate(&[]), "");
    }

    #[test]
    fn single_platform_output_is_unguarded() {
        let output = generate(&[parse("Main")]);
        assert!(!output.contains("#if os("));
        assert!(!output.contains("#endif"));
        assert!(output.starts_with("//\n// Autogenerated by sbgen"));
    }

    #[test]
    fn main_storyboard_round_trip() {
        let output = generate(&[parse("Main")]);

        assert!(output.contains("import UIKit\nimport BarKit\n"));
        assert!(!output.contains("import App"));
        assert!(output.contains("struct Storyboards {\n\n    struct Main: Storyboard {"));
        assert!(output.contains("static func instantiateInitialViewController() -> FooController {"));
        assert!(output.contains("static func instantiateFoo() -> FooController {"));
        assert!(output.contains("extension IdentifiableProtocol where Self: FooController {"));
        assert!(output.contains("var storyboardIdentifier: String? { return \"foo\" }"));
        assert!(output.contains("case toBar = \"toBar\""));
        assert!(output.contains("return BarController.self"));
        assert!(output.contains("static let brandRed = UIColor(named: \"brandRed\")"));
        assert_eq!(output.matches("static let brandRed").count(), 1);
        assert!(output.contains("case FooCell_ = \"FooCell\""));
    }

    #[test]
    fn sections_follow_fixed_order() {
        let output = generate(&[parse("Main")]);
        let positions = [
            "// MARK: - Storyboards",
            "protocol Storyboard {",
            "struct Storyboards {",
            "// MARK: - ReusableKind",
            "// MARK: - SegueKind",
            "// MARK: - IdentifiableProtocol",
            "// MARK: - SegueProtocol",
            "// MARK: - ReusableViewProtocol",
            "// MARK: - Protocol Implementation",
            "extension UIStoryboardSegue: SegueProtocol {",
            "extension UIViewController {",
            "extension UICollectionView {",
            "extension UITableView {",
            "// MARK: - Colors",
            "// MARK: - FooController",
            "// MARK: - BarController",
        ]
        .iter()
        .map(|needle| output.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn mixed_platforms_are_guarded_in_platform_order() {
        let output = generate(&[parse("Desk"), parse("Main")]);
        let ios = output.find("#if os(iOS)\n").expect("ios guard");
        let osx = output.find("#if os(OSX)\n").expect("osx guard");
        assert!(ios < osx);
        assert_eq!(output.matches("#endif\n").count(), 2);
        assert!(output.ends_with("#endif\n"));

        let mac_block = &output[osx..];
        assert!(mac_block.contains("import Cocoa"));
        assert!(mac_block.contains("struct Desk: Storyboard {"));
        assert!(mac_block.contains("static let panelGray = NSColor(named: \"panelGray\")"));
        assert!(mac_block.contains("@available(OSX 10.13, *)"));
        assert!(!mac_block.contains("struct Main: Storyboard"));
    }

    #[test]
    fn mac_block_covers_both_controller_kinds() {
        let output = generate(&[parse("Desk")]);
        assert!(output.contains(
            "return self.storyboard.instantiateInitialController() as! DeskWindowController"
        ));
        assert!(output.contains("static func instantiateMainWindow() -> DeskWindowController {"));
        assert!(output.contains("case showAdvanced = \"showAdvanced\""));
        assert!(output.contains(
            "case .showAdvanced:\n                return SegueKind(rawValue: \"sheet\")"
        ));
        assert!(output.contains("return DeskWindowController.self"));
        assert!(!output.contains("extension UITableView"));
    }

    #[test]
    fn generate_platform_emits_one_block() {
        let main = parse("Main");
        let output = generate_platform(Platform::Ios, &[&main]);
        assert_eq!(output, generate(std::slice::from_ref(&main)));
    }
}
