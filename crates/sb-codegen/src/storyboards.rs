use sb_core::{swift_identifier, FirstLetter, PlatformProfile};
use sb_model::Storyboard;

use crate::writer::SwiftWriter;

/// Writes the `Storyboards.<Name>` accessor struct for one file.
pub(crate) fn write_storyboard(w: &mut SwiftWriter, storyboard: &Storyboard) {
    let profile = storyboard.profile();
    let struct_name = swift_identifier(&storyboard.name, FirstLetter::Capitalize, Some("Storyboard"));

    w.blank();
    w.block(format!("struct {}: Storyboard", struct_name), |w| {
        w.blank();
        w.line(format!(
            "static let identifier = {}",
            PlatformProfile::identifier_literal(profile.storyboard_identifier_type, &storyboard.name)
        ));
        w.blank();
        w.block(format!("static var storyboard: {}", profile.storyboard_type), |w| {
            w.line(format!(
                "return {}(name: self.identifier, bundle: nil)",
                profile.storyboard_type
            ));
        });

        if let Some(initial_class) = &storyboard.initial_view_controller_class {
            w.blank();
            write_initial_controller(w, profile, initial_class);
        }

        for info in profile.instantiation_info {
            let cast = if info.return_type == profile.controller_return_type {
                String::new()
            } else {
                format!(" as! {}", info.return_type)
            };
            w.blank();
            w.block(
                format!(
                    "static func instantiate{}(withIdentifier identifier: {}) -> {}",
                    info.signature, profile.scene_identifier_type, info.return_type
                ),
                |w| {
                    w.line(format!(
                        "return self.storyboard.instantiate{}(withIdentifier: identifier){}",
                        info.signature, cast
                    ));
                },
            );
            w.blank();
            w.block(
                format!(
                    "static func instantiateViewController<T: {}>(ofType type: T.Type) -> T? where T: IdentifiableProtocol",
                    info.return_type
                ),
                |w| w.line("return self.storyboard.instantiateViewController(ofType: type)"),
            );
        }

        for scene in &storyboard.scenes {
            let Some(controller) = &scene.view_controller else {
                continue;
            };
            let (Some(identifier), Some(class)) =
                (&controller.storyboard_identifier, &controller.controller_class)
            else {
                continue;
            };

            let cast = if class == profile.controller_return_type {
                String::new()
            } else {
                format!(" as! {}", class)
            };
            w.blank();
            w.block(
                format!(
                    "static func instantiate{}() -> {}",
                    swift_identifier(identifier, FirstLetter::Capitalize, None),
                    class
                ),
                |w| {
                    w.line(format!(
                        "return self.storyboard.instantiate{}(withIdentifier: {}){}",
                        profile.controller_signature,
                        PlatformProfile::identifier_literal(profile.scene_identifier_type, identifier),
                        cast
                    ));
                },
            );
        }
    });
}

fn write_initial_controller(w: &mut SwiftWriter, profile: &PlatformProfile, class: &str) {
    let cast = if class == profile.controller_return_type {
        if profile.initial_controller_is_optional {
            "!".to_string()
        } else {
            String::new()
        }
    } else {
        format!(" as! {}", class)
    };
    w.block(
        format!(
            "static func instantiateInitial{}() -> {}",
            profile.controller_signature, class
        ),
        |w| {
            w.line(format!(
                "return self.storyboard.instantiateInitial{}(){}",
                profile.controller_signature, cast
            ));
        },
    );
}
