use std::collections::BTreeSet;

use sb_core::{swift_identifier, swift_string_literal, FirstLetter, PlatformProfile};
use sb_model::{Segue, SegueKind, Storyboard, ViewController};

use crate::writer::SwiftWriter;

/// Writes per-class extensions, once per distinct custom class in the group.
pub(crate) fn write_view_controllers(
    w: &mut SwiftWriter,
    profile: &PlatformProfile,
    group: &[&Storyboard],
) {
    let mut emitted = BTreeSet::new();
    for storyboard in group {
        for scene in &storyboard.scenes {
            let Some(controller) = &scene.view_controller else {
                continue;
            };
            let Some(custom_class) = controller.custom_class.as_deref() else {
                continue;
            };
            if !emitted.insert(custom_class) {
                log::debug!(
                    "Skipping duplicate class {} in storyboard {}.",
                    custom_class,
                    storyboard.name
                );
                continue;
            }

            let segues = scene.identified_segues().collect::<Vec<_>>();
            write_view_controller(w, profile, custom_class, controller, &segues);
        }
    }
}

fn write_view_controller(
    w: &mut SwiftWriter,
    profile: &PlatformProfile,
    custom_class: &str,
    controller: &ViewController,
    segues: &[&Segue],
) {
    w.mark(custom_class);
    w.blank();

    let segue_cases = segues
        .iter()
        .filter_map(|segue| {
            let raw = segue.identifier.as_deref()?;
            let case = case_name(custom_class, "Segue", raw, FirstLetter::Lowercase, None)?;
            Some((case, raw, *segue))
        })
        .collect::<Vec<_>>();

    if !segue_cases.is_empty() {
        w.block(format!("extension {}", profile.segue_type), |w| {
            w.block(format!("func selection() -> {}.Segue?", custom_class), |w| {
                w.block("if let identifier = self.identifier", |w| {
                    w.line(format!("return {}.Segue(rawValue: identifier)", custom_class));
                });
                w.line("return nil");
            });
        });
        w.blank();
    }

    if let Some(identifier) = &controller.storyboard_identifier {
        write_identifiable(w, profile, custom_class, controller, identifier);
    }

    if !segue_cases.is_empty() {
        w.block(format!("extension {}", custom_class), |w| {
            w.blank();
            write_segue_enum(w, profile, custom_class, &segue_cases);
            w.blank();
        });
        w.blank();
    }

    let reusable_cases = controller
        .identified_reusables()
        .filter_map(|reusable| {
            let raw = reusable.reuse_identifier.as_deref()?;
            let class = reusable.custom_class.as_deref();
            let case = case_name(custom_class, "Reusable", raw, FirstLetter::Keep, class)?;
            Some((case, raw, reusable.kind.as_str(), class))
        })
        .collect::<Vec<_>>();
    if !reusable_cases.is_empty() {
        w.block(format!("extension {}", custom_class), |w| {
            w.blank();
            write_reusable_enum(w, profile, custom_class, &reusable_cases);
            w.blank();
        });
        w.blank();
    }
}

type ReusableCase<'a> = (String, &'a str, &'a str, Option<&'a str>);

fn write_reusable_enum(
    w: &mut SwiftWriter,
    profile: &PlatformProfile,
    custom_class: &str,
    cases: &[ReusableCase<'_>],
) {
    warn_on_collisions(custom_class, "Reusable", cases.iter().map(|case| case.0.as_str()));

    w.block(
        "enum Reusable: String, CustomStringConvertible, ReusableViewProtocol",
        |w| {
            for (case, raw, _, _) in cases {
                w.line(format!("case {} = {}", case, swift_string_literal(raw)));
            }
            w.blank();
            w.block("var kind: ReusableKind?", |w| {
                w.switch("self", |w| {
                    for (case, _, kind, _) in cases {
                        w.line(format!("case .{}:", case));
                        w.line(format!("    return ReusableKind(rawValue: {})", swift_string_literal(kind)));
                    }
                });
            });
            w.blank();
            w.block(format!("var viewType: {}.Type?", profile.view_type), |w| {
                w.switch("self", |w| {
                    let mut needs_default = false;
                    for (case, _, _, class) in cases {
                        match class {
                            Some(class) => {
                                w.line(format!("case .{}:", case));
                                w.line(format!("    return {}.self", class));
                            }
                            None => needs_default = true,
                        }
                    }
                    if needs_default {
                        w.line("default:");
                        w.line("    return nil");
                    }
                });
            });
            w.blank();
            w.line(format!(
                "var storyboardIdentifier: {}? {{ return {} }}",
                profile.scene_identifier_type,
                identifier_expression(profile.scene_identifier_type, "self.description")
            ));
            w.line("var description: String { return self.rawValue }");
        },
    );
}

/// Synthesized enum case for `raw`, or `None` when nothing usable is left.
fn case_name(
    class: &str,
    enum_name: &str,
    raw: &str,
    first_letter: FirstLetter,
    do_not_shadow: Option<&str>,
) -> Option<String> {
    let case = swift_identifier(raw, first_letter, do_not_shadow);
    if case.is_empty() {
        log::warn!(
            "Identifier \"{}\" in {}.{} has no usable case name; skipped.",
            raw,
            class,
            enum_name
        );
        return None;
    }
    Some(case)
}

fn write_identifiable(
    w: &mut SwiftWriter,
    profile: &PlatformProfile,
    custom_class: &str,
    controller: &ViewController,
    identifier: &str,
) {
    let protocol = format!("{}IdentifiableProtocol", custom_class);
    let literal = PlatformProfile::identifier_literal(profile.scene_identifier_type, identifier);
    // public only for classes compiled into the app module
    let access = if controller.custom_module.is_some() { "" } else { "public " };

    w.line(format!("protocol {}: IdentifiableProtocol {{ }}", protocol));
    w.blank();
    w.line(format!("extension {}: {} {{ }}", custom_class, protocol));
    w.blank();
    w.block(
        format!("extension IdentifiableProtocol where Self: {}", custom_class),
        |w| {
            w.line(format!(
                "{}var storyboardIdentifier: {}? {{ return {} }}",
                access, profile.scene_identifier_type, literal
            ));
            w.line(format!(
                "static var storyboardIdentifier: {}? {{ return {} }}",
                profile.scene_identifier_type, literal
            ));
        },
    );
    w.blank();
}

fn write_segue_enum(
    w: &mut SwiftWriter,
    profile: &PlatformProfile,
    custom_class: &str,
    cases: &[(String, &str, &Segue)],
) {
    warn_on_collisions(custom_class, "Segue", cases.iter().map(|case| case.0.as_str()));

    w.block(
        format!(
            "enum Segue: {}, CustomStringConvertible, SegueProtocol",
            profile.segue_identifier_type
        ),
        |w| {
            for (case, raw, _) in cases {
                w.line(format!("case {} = {}", case, swift_string_literal(raw)));
            }
            w.blank();

            w.block("var kind: SegueKind?", |w| {
                w.switch("self", |w| {
                    for (case, _, segue) in cases {
                        if let SegueKind::Other(raw) = &segue.kind {
                            log::warn!(
                                "Segue \"{}\" of {} has unknown kind \"{}\".",
                                case,
                                custom_class,
                                raw
                            );
                        }
                        w.line(format!("case .{}:", case));
                        w.line(format!(
                            "    return SegueKind(rawValue: {})",
                            swift_string_literal(segue.kind.as_str())
                        ));
                    }
                });
            });
            w.blank();

            w.block(format!("var destination: {}.Type?", profile.controller_return_type), |w| {
                w.switch("self", |w| {
                    let mut needs_default = false;
                    for (case, _, segue) in cases {
                        match &segue.destination_class {
                            Some(class) => {
                                w.line(format!("case .{}:", case));
                                w.line(format!("    return {}.self", class));
                            }
                            None => needs_default = true,
                        }
                    }
                    if needs_default {
                        w.line("default:");
                        w.line("    assertionFailure(\"Unknown destination\")");
                        w.line("    return nil");
                    }
                });
            });
            w.blank();

            w.line(format!(
                "var identifier: {}? {{ return self.rawValue }}",
                profile.segue_identifier_type
            ));
            w.line("var description: String { return \"\\(self.rawValue)\" }");
        },
    );
}

fn identifier_expression(type_name: &str, expression: &str) -> String {
    if type_name == "String" {
        expression.to_string()
    } else {
        format!("{}({})", type_name, expression)
    }
}

fn warn_on_collisions<'a>(class: &str, enum_name: &str, cases: impl Iterator<Item = &'a str>) {
    let mut seen = BTreeSet::new();
    for case in cases {
        if !seen.insert(case) {
            log::warn!(
                "Duplicate case \"{}\" in {}.{}; the generated enum will not compile.",
                case,
                class,
                enum_name
            );
        }
    }
}

#[cfg(test)]
mod view_controllers_tests {
    use super::*;
    use sb_test_fixtures::storyboard_source;
    use sb_core::Platform;

    fn render(sources: &[(&str, &str)]) -> String {
        let storyboards = sources
            .iter()
            .map(|(name, source)| Storyboard::parse(name, source).expect("storyboard should parse"))
            .collect::<Vec<_>>();
        let group = storyboards.iter().collect::<Vec<_>>();
        let profile = group
            .first()
            .map(|storyboard| storyboard.profile())
            .unwrap_or_else(|| Platform::Ios.profile());
        let mut writer = SwiftWriter::new();
        write_view_controllers(&mut writer, profile, &group);
        writer.finish()
    }

    #[test]
    fn foo_controller_gets_identifiable_and_segue_extensions() {
        let main = storyboard_source("Main");
        let output = render(&[("Main", main.as_str())]);
        assert!(output.contains("// MARK: - FooController"));
        assert!(output.contains("func selection() -> FooController.Segue? {"));
        assert!(output.contains("protocol FooControllerIdentifiableProtocol: IdentifiableProtocol { }"));
        assert!(output.contains("extension FooController: FooControllerIdentifiableProtocol { }"));
        assert!(output.contains("extension IdentifiableProtocol where Self: FooController {"));
        assert!(output.contains("    var storyboardIdentifier: String? { return \"foo\" }"));
        assert!(output.contains("static var storyboardIdentifier: String? { return \"foo\" }"));
        assert!(output.contains("enum Segue: String, CustomStringConvertible, SegueProtocol {"));
        assert!(output.contains("case toBar = \"toBar\""));
        assert!(output.contains("case .toBar:\n                return SegueKind(rawValue: \"show\")"));
        assert!(output.contains("case .toBar:\n                return BarController.self"));
        assert!(!output.contains("Unknown destination"));
    }

    #[test]
    fn class_without_module_gets_public_identifier() {
        let output = render(&[(
            "Local",
            r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<viewController id="v" customClass="LocalController" storyboardIdentifier="local" sceneMemberID="viewController"/>
</objects></scene></scenes></document>"#,
        )]);
        assert!(output.contains("public var storyboardIdentifier: String? { return \"local\" }"));
        assert!(!output.contains("selection()"));
        assert!(!output.contains("enum Segue"));
    }

    #[test]
    fn bar_controller_without_identifier_or_segues_is_only_marked() {
        let main = storyboard_source("Main");
        let output = render(&[("Main", main.as_str())]);
        let bar = &output[output.find("// MARK: - BarController").expect("bar mark")..];
        assert!(!bar.contains("BarControllerIdentifiableProtocol"));
        assert!(!bar.contains("extension BarController"));
    }

    #[test]
    fn reusable_case_is_guarded_against_its_own_class() {
        let main = storyboard_source("Main");
        let output = render(&[("Main", main.as_str())]);
        assert!(output.contains("enum Reusable: String, CustomStringConvertible, ReusableViewProtocol {"));
        assert!(output.contains("case FooCell_ = \"FooCell\""));
        assert!(output.contains("case .FooCell_:\n                return ReusableKind(rawValue: \"tableViewCell\")"));
        assert!(output.contains("case .FooCell_:\n                return FooCell.self"));
        assert!(!output.contains("case FooCell ="));
        assert!(output.contains("var storyboardIdentifier: String? { return self.description }"));
    }

    #[test]
    fn reusable_named_after_the_owning_class_is_not_suffixed() {
        let output = render(&[(
            "Cells",
            r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<tableViewController id="t" customClass="ListCell" sceneMemberID="viewController">
  <tableView><prototypes><tableViewCell reuseIdentifier="ListCell"/></prototypes></tableView>
</tableViewController>
</objects></scene></scenes></document>"#,
        )]);
        assert!(output.contains("case ListCell = \"ListCell\""));
        assert!(!output.contains("ListCell_"));
    }

    #[test]
    fn reusable_without_class_adds_default_view_type_arm() {
        let output = render(&[(
            "Cells",
            r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<tableViewController id="t" customClass="ListController" sceneMemberID="viewController">
  <tableView><prototypes>
    <tableViewCell reuseIdentifier="plain"/>
    <tableViewCell reuseIdentifier="fancy" customClass="FancyCell"/>
  </prototypes></tableView>
</tableViewController>
</objects></scene></scenes></document>"#,
        )]);
        assert!(output.contains("case .plain:\n                return ReusableKind(rawValue: \"tableViewCell\")"));

        let view_type = &output[output.find("var viewType").expect("viewType accessor")..];
        let view_type = &view_type[..view_type.find("var storyboardIdentifier").expect("end of viewType")];
        assert!(view_type.contains("case .fancy:\n                return FancyCell.self"));
        assert!(!view_type.contains("case .plain:"));
        assert!(view_type.contains("default:\n                return nil"));
    }

    #[test]
    fn unresolved_destination_adds_assertion_arm() {
        let output = render(&[(
            "Dangling",
            r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<viewController id="v" customClass="SourceController" sceneMemberID="viewController">
  <connections>
    <segue destination="missing" kind="show" identifier="go away" id="g"/>
  </connections>
</viewController>
</objects></scene></scenes></document>"#,
        )]);
        assert!(output.contains("case goaway = \"go away\""));
        assert!(output.contains(
            "default:\n                assertionFailure(\"Unknown destination\")\n                return nil"
        ));
    }

    #[test]
    fn unknown_segue_kind_keeps_its_raw_kind_arm() {
        let output = render(&[(
            "Odd",
            r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<viewController id="v" customClass="OddController" sceneMemberID="viewController">
  <connections>
    <segue destination="v" kind="showDetail" identifier="detail" id="o"/>
    <segue destination="v" kind="sheet" identifier="odd" id="p"/>
  </connections>
</viewController>
</objects></scene></scenes></document>"#,
        )]);
        assert!(output.contains("case .detail:\n                return SegueKind(rawValue: \"showDetail\")"));
        assert!(output.contains("case .odd:\n                return SegueKind(rawValue: \"sheet\")"));
        assert!(!output.contains("Invalid value"));
    }

    #[test]
    fn identifiers_are_escaped_in_raw_values() {
        let output = render(&[(
            "Quoted",
            r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<tableViewController id="t" customClass="QuotedController" storyboardIdentifier="a&quot;b" sceneMemberID="viewController">
  <tableView><prototypes><tableViewCell reuseIdentifier="c\d"/></prototypes></tableView>
  <connections>
    <segue destination="t" kind="show" identifier="x\y&quot;" id="q"/>
  </connections>
</tableViewController>
</objects></scene></scenes></document>"#,
        )]);
        assert!(output.contains(r#"static var storyboardIdentifier: String? { return "a\"b" }"#));
        assert!(output.contains(r#"case xy = "x\\y\"""#));
        assert!(output.contains(r#"case cd = "c\\d""#));
    }

    #[test]
    fn identifiers_without_case_name_are_skipped() {
        let output = render(&[(
            "Symbols",
            r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<tableViewController id="t" customClass="SymbolController" sceneMemberID="viewController">
  <tableView><prototypes><tableViewCell reuseIdentifier="**"/></prototypes></tableView>
  <connections>
    <segue destination="t" kind="show" identifier="--" id="a"/>
    <segue destination="t" kind="show" identifier="next" id="b"/>
  </connections>
</tableViewController>
</objects></scene></scenes></document>"#,
        )]);
        assert!(output.contains("case next = \"next\""));
        assert!(!output.contains("\"--\""));
        assert!(!output.contains("case  ="));
        assert!(!output.contains("enum Reusable"));

        let only_symbols = render(&[(
            "Symbols",
            r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<viewController id="v" customClass="BareController" sceneMemberID="viewController">
  <connections>
    <segue destination="v" kind="show" identifier="--" id="a"/>
  </connections>
</viewController>
</objects></scene></scenes></document>"#,
        )]);
        assert!(only_symbols.contains("// MARK: - BareController"));
        assert!(!only_symbols.contains("enum Segue"));
        assert!(!only_symbols.contains("selection()"));
    }

    #[test]
    fn duplicate_custom_class_is_emitted_once() {
        let second = r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<viewController id="v" customClass="FooController" storyboardIdentifier="again" sceneMemberID="viewController"/>
</objects></scene></scenes></document>"#;
        let main = storyboard_source("Main");
        let output = render(&[("Main", main.as_str()), ("Other", second)]);
        assert_eq!(output.matches("// MARK: - FooController\n").count(), 1);
        assert!(output.contains("return \"foo\""));
        assert!(!output.contains("return \"again\""));
    }

    #[test]
    fn colliding_case_names_are_emitted_verbatim() {
        let output = render(&[(
            "Clash",
            r#"<document version="3.0"><scenes><scene sceneID="s"><objects>
<viewController id="v" customClass="ClashController" sceneMemberID="viewController">
  <connections>
    <segue destination="v" kind="show" identifier="show-detail" id="a"/>
    <segue destination="v" kind="show" identifier="showdetail" id="b"/>
  </connections>
</viewController>
</objects></scene></scenes></document>"#,
        )]);
        assert!(output.contains("case showdetail = \"show-detail\""));
        assert!(output.contains("case showdetail = \"showdetail\""));
    }

    #[test]
    fn mac_identifiers_are_wrapped_in_platform_types() {
        let output = render(&[(
            "Desk",
            r#"<document version="3.0" targetRuntime="MacOSX.Cocoa"><scenes><scene sceneID="s"><objects>
<viewController id="v" customClass="PrefsController" storyboardIdentifier="prefs" sceneMemberID="viewController">
  <connections>
    <segue destination="v" kind="custom" identifier="again" id="a"/>
  </connections>
</viewController>
</objects></scene></scenes></document>"#,
        )]);
        assert!(output.contains("extension NSStoryboardSegue {"));
        assert!(output.contains(
            "static var storyboardIdentifier: NSStoryboard.SceneIdentifier? { return NSStoryboard.SceneIdentifier(\"prefs\") }"
        ));
        assert!(output.contains(
            "enum Segue: NSStoryboardSegue.Identifier, CustomStringConvertible, SegueProtocol {"
        ));
        assert!(output.contains("var destination: AnyObject.Type? {"));
        assert!(output.contains("return PrefsController.self"));
    }
}
