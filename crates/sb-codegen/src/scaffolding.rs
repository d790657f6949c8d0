use std::collections::BTreeSet;

use sb_core::{swift_identifier, swift_string_literal, FirstLetter, PlatformProfile};
use sb_model::{SegueKind, Storyboard, REUSABLE_KINDS};

use crate::writer::SwiftWriter;

pub(crate) fn write_header(w: &mut SwiftWriter, profile: &PlatformProfile, group: &[&Storyboard]) {
    w.line("//");
    w.line("// Autogenerated by sbgen - storyboard code generator");
    w.line("//");
    w.line(format!("import {}", profile.framework));

    let modules = group
        .iter()
        .flat_map(|storyboard| storyboard.custom_modules.iter())
        .collect::<BTreeSet<_>>();
    for module in modules {
        w.line(format!("import {}", module));
    }
    w.blank();
}

pub(crate) fn write_storyboard_extension(w: &mut SwiftWriter, profile: &PlatformProfile) {
    w.mark("Storyboards");
    w.blank();
    w.block(format!("extension {}", profile.storyboard_type), |w| {
        for (index, info) in profile.instantiation_info.iter().enumerate() {
            if index > 0 {
                w.blank();
            }
            w.block(
                format!(
                    "func instantiateViewController<T: {}>(ofType type: T.Type) -> T? where T: IdentifiableProtocol",
                    info.return_type
                ),
                |w| {
                    w.line("let instance = type.init()");
                    w.block("if let identifier = instance.storyboardIdentifier", |w| {
                        w.line(format!(
                            "return self.instantiate{}(withIdentifier: identifier) as? T",
                            info.signature
                        ));
                    });
                    w.line("return nil");
                },
            );
        }
    });
    w.blank();

    w.block("protocol Storyboard", |w| {
        w.line(format!("static var storyboard: {} {{ get }}", profile.storyboard_type));
        w.line(format!(
            "static var identifier: {} {{ get }}",
            profile.storyboard_identifier_type
        ));
    });
    w.blank();
}

pub(crate) fn write_kinds(w: &mut SwiftWriter) {
    let segue_kinds = SegueKind::KNOWN;
    let segue_raw = segue_kinds
        .iter()
        .map(SegueKind::as_str)
        .collect::<Vec<_>>();
    write_string_enum(w, "ReusableKind", &REUSABLE_KINDS);
    write_string_enum(w, "SegueKind", &segue_raw);
}

fn write_string_enum(w: &mut SwiftWriter, name: &str, raw_values: &[&str]) {
    w.mark(name);
    w.blank();
    w.block(format!("enum {}: String, CustomStringConvertible", name), |w| {
        for raw in raw_values {
            let case = swift_identifier(raw, FirstLetter::Lowercase, None);
            w.line(format!("case {} = {}", case, swift_string_literal(raw)));
        }
        w.blank();
        w.line("var description: String { return self.rawValue }");
    });
    w.blank();
}

pub(crate) fn write_protocols(w: &mut SwiftWriter, profile: &PlatformProfile) {
    let segue_id = profile.segue_identifier_type;

    w.mark("IdentifiableProtocol");
    w.blank();
    w.block("public protocol IdentifiableProtocol: Equatable", |w| {
        w.line(format!(
            "var storyboardIdentifier: {}? {{ get }}",
            profile.scene_identifier_type
        ));
    });
    w.blank();

    w.mark("SegueProtocol");
    w.blank();
    w.block("public protocol SegueProtocol", |w| {
        w.line(format!("var identifier: {}? {{ get }}", segue_id));
    });
    w.blank();

    for op in ["==", "~="] {
        w.block(
            format!(
                "public func {}<T: SegueProtocol, U: SegueProtocol>(lhs: T, rhs: U) -> Bool",
                op
            ),
            |w| w.line("return lhs.identifier == rhs.identifier"),
        );
        w.blank();
        w.block(
            format!("public func {}<T: SegueProtocol>(lhs: T, rhs: {}) -> Bool", op, segue_id),
            |w| w.line("return lhs.identifier == rhs"),
        );
        w.blank();
        w.block(
            format!("public func {}<T: SegueProtocol>(lhs: {}, rhs: T) -> Bool", op, segue_id),
            |w| w.line("return lhs == rhs.identifier"),
        );
        w.blank();
    }

    w.mark("ReusableViewProtocol");
    w.blank();
    w.block("public protocol ReusableViewProtocol: IdentifiableProtocol", |w| {
        w.line(format!("var viewType: {}.Type? {{ get }}", profile.view_type));
    });
    w.blank();
    w.block(
        "public func ==<T: ReusableViewProtocol, U: ReusableViewProtocol>(lhs: T, rhs: U) -> Bool",
        |w| w.line("return lhs.storyboardIdentifier == rhs.storyboardIdentifier"),
    );
    w.blank();
}

pub(crate) fn write_conformances(w: &mut SwiftWriter, profile: &PlatformProfile) {
    w.mark("Protocol Implementation");
    w.blank();
    w.line(format!("extension {}: SegueProtocol {{", profile.segue_type));
    w.line("}");
    w.blank();

    for view in profile.reusable_views {
        w.block(format!("extension {}: ReusableViewProtocol", view), |w| {
            w.line(format!(
                "public var viewType: {}.Type? {{ return type(of: self) }}",
                profile.view_type
            ));
            w.line(format!(
                "public var storyboardIdentifier: {}? {{ return self.reuseIdentifier }}",
                profile.scene_identifier_type
            ));
        });
        w.blank();
    }

    for controller in profile.controller_types {
        w.mark(format!("{} extension", controller));
        w.blank();
        w.block(format!("extension {}", controller), |w| {
            w.block("func perform<T: SegueProtocol>(segue: T, sender: Any?)", |w| {
                w.block("if let identifier = segue.identifier", |w| {
                    w.line("performSegue(withIdentifier: identifier, sender: sender)");
                });
            });
            w.blank();
            w.block("func perform<T: SegueProtocol>(segue: T)", |w| {
                w.line("perform(segue: segue, sender: nil)");
            });
        });
        w.blank();
    }
}

pub(crate) fn write_reusable_container_helpers(w: &mut SwiftWriter, profile: &PlatformProfile) {
    if !profile.reusable_container_helpers {
        return;
    }

    w.mark("UICollectionView");
    w.blank();
    w.block("extension UICollectionView", |w| {
        w.block(
            "func dequeue<T: ReusableViewProtocol>(reusable: T, for indexPath: IndexPath) -> UICollectionViewCell?",
            |w| {
                w.block("if let identifier = reusable.storyboardIdentifier", |w| {
                    w.line("return dequeueReusableCell(withReuseIdentifier: identifier, for: indexPath)");
                });
                w.line("return nil");
            },
        );
        w.blank();
        w.block("func register<T: ReusableViewProtocol>(reusable: T)", |w| {
            w.block(
                "if let type = reusable.viewType, let identifier = reusable.storyboardIdentifier",
                |w| w.line("register(type, forCellWithReuseIdentifier: identifier)"),
            );
        });
        w.blank();
        w.block(
            "func dequeueReusableSupplementaryViewOfKind<T: ReusableViewProtocol>(elementKind: String, withReusable reusable: T, for indexPath: IndexPath) -> UICollectionReusableView?",
            |w| {
                w.block("if let identifier = reusable.storyboardIdentifier", |w| {
                    w.line("return dequeueReusableSupplementaryView(ofKind: elementKind, withReuseIdentifier: identifier, for: indexPath)");
                });
                w.line("return nil");
            },
        );
        w.blank();
        w.block(
            "func register<T: ReusableViewProtocol>(reusable: T, forSupplementaryViewOfKind elementKind: String)",
            |w| {
                w.block(
                    "if let type = reusable.viewType, let identifier = reusable.storyboardIdentifier",
                    |w| w.line("register(type, forSupplementaryViewOfKind: elementKind, withReuseIdentifier: identifier)"),
                );
            },
        );
    });
    w.blank();

    w.mark("UITableView");
    w.blank();
    w.block("extension UITableView", |w| {
        w.block(
            "func dequeue<T: ReusableViewProtocol>(reusable: T, for indexPath: IndexPath) -> UITableViewCell?",
            |w| {
                w.block("if let identifier = reusable.storyboardIdentifier", |w| {
                    w.line("return dequeueReusableCell(withIdentifier: identifier, for: indexPath)");
                });
                w.line("return nil");
            },
        );
        w.blank();
        w.block("func register<T: ReusableViewProtocol>(reusable: T)", |w| {
            w.block(
                "if let type = reusable.viewType, let identifier = reusable.storyboardIdentifier",
                |w| w.line("register(type, forCellReuseIdentifier: identifier)"),
            );
        });
        w.blank();
        w.block(
            "func dequeueReusableHeaderFooter<T: ReusableViewProtocol>(_ reusable: T) -> UITableViewHeaderFooterView?",
            |w| {
                w.block("if let identifier = reusable.storyboardIdentifier", |w| {
                    w.line("return dequeueReusableHeaderFooterView(withIdentifier: identifier)");
                });
                w.line("return nil");
            },
        );
        w.blank();
        w.block(
            "func registerReusableHeaderFooter<T: ReusableViewProtocol>(_ reusable: T)",
            |w| {
                w.block(
                    "if let type = reusable.viewType, let identifier = reusable.storyboardIdentifier",
                    |w| w.line("register(type, forHeaderFooterViewReuseIdentifier: identifier)"),
                );
            },
        );
    });
    w.blank();
}

/// Named color asset accessors, one per distinct name in first-seen order.
pub(crate) fn write_colors(w: &mut SwiftWriter, profile: &PlatformProfile, group: &[&Storyboard]) {
    let mut seen = BTreeSet::new();
    let names = group
        .iter()
        .flat_map(|storyboard| storyboard.colors.iter())
        .filter_map(|color| color.named_asset())
        .filter(|name| seen.insert(*name))
        .collect::<Vec<_>>();
    if names.is_empty() {
        return;
    }

    w.mark("Colors");
    w.blank();
    w.line(format!("@available({}, *)", profile.color_availability));
    w.block(format!("extension {}", profile.color_type), |w| {
        for name in names {
            let accessor = swift_identifier(name, FirstLetter::Keep, None);
            if accessor.is_empty() {
                log::warn!("Color \"{}\" has no usable accessor name; skipped.", name);
                continue;
            }
            w.line(format!(
                "static let {} = {}(named: {})",
                accessor,
                profile.color_type,
                swift_string_literal(name)
            ));
        }
    });
    w.blank();
}
