#![allow(non_snake_case)]

use super::*;

fn file_with(names: &[&str]) -> FileUnit {
    names
        .iter()
        .fold(FileUnit::new("game/login.proto"), |file, name| {
            file.with_message(MessageType::new(*name))
        })
}

#[test]
fn Syntax___from_descriptor___recognizes_proto3() {
    assert_eq!(Syntax::from_descriptor("proto3"), Syntax::Proto3);
}

#[test]
fn Syntax___from_descriptor___defaults_to_proto2() {
    assert_eq!(Syntax::from_descriptor(""), Syntax::Proto2);
    assert_eq!(Syntax::from_descriptor("proto2"), Syntax::Proto2);
    assert_eq!(Syntax::from_descriptor("editions"), Syntax::Proto2);
}

#[test]
fn FileUnit___stem___strips_extension_and_keeps_directory() {
    let file = FileUnit::new("game/login.proto");

    assert_eq!(file.stem(), "game/login");
}

#[test]
fn FileUnit___stem___ignores_dots_in_directories() {
    let file = FileUnit::new("v1.2/login");

    assert_eq!(file.stem(), "v1.2/login");
}

#[test]
fn FileUnit___stem___only_strips_last_extension() {
    let file = FileUnit::new("login.v2.proto");

    assert_eq!(file.stem(), "login.v2");
}

#[test]
fn FileUnit___with_sorted_messages___orders_by_name() {
    let file = file_with(&["PingEvent", "LoginRequest", "GameConfig", "LoginResponse"]);

    let sorted = file.with_sorted_messages();

    let names: Vec<&str> = sorted.messages.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["GameConfig", "LoginRequest", "LoginResponse", "PingEvent"]
    );
}

#[test]
fn FileUnit___with_sorted_messages___uses_ordinal_comparison() {
    let file = file_with(&["alphaRequest", "BetaRequest", "ZetaRequest"]);

    let sorted = file.with_sorted_messages();

    let names: Vec<&str> = sorted.messages.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["BetaRequest", "ZetaRequest", "alphaRequest"]);
}

#[test]
fn FileUnit___with_sorted_messages___leaves_original_untouched() {
    let file = file_with(&["B", "A"]);

    let _sorted = file.with_sorted_messages();

    assert_eq!(file.messages[0].name, "B");
}

#[test]
fn MessageType___is_command_type___delegates_to_suffix_rule() {
    assert!(MessageType::new("LoginRequest").is_command_type());
    assert!(!MessageType::new("GameConfig").is_command_type());
}

#[test]
fn Field___repeated___sets_label() {
    let field = Field::scalar("ids", ScalarKind::Int64).repeated();

    assert!(field.is_repeated());
    assert_eq!(field.label, Label::Repeated);
}

#[test]
fn FieldType___type_name___returns_reference_only() {
    assert_eq!(FieldType::Scalar(ScalarKind::Bool).type_name(), None);
    assert_eq!(
        FieldType::Message(".game.Item".into()).type_name(),
        Some(".game.Item")
    );
}

#[test]
fn FileUnit___deserialize___applies_defaults() {
    let json = r#"{"name": "a.proto", "messages": [{"name": "PingEvent"}]}"#;

    let file: FileUnit = serde_json::from_str(json).unwrap();

    assert_eq!(file.syntax, Syntax::Proto2);
    assert!(file.package.is_empty());
    assert!(file.messages[0].fields.is_empty());
}

#[test]
fn FieldType___serialize___uses_snake_case_tags() {
    let value = serde_json::to_value(FieldType::Scalar(ScalarKind::Sfixed64)).unwrap();

    assert_eq!(value, serde_json::json!({"scalar": "sfixed64"}));
}
