#![allow(non_snake_case)]

use super::*;
use cmdgen_core::FileOptions;
use test_case::test_case;

fn package_for(file: &FileUnit) -> String {
    let commands = CommandIds::default();
    let options = GeneratorOptions::default();
    let types = TypeMaps::default();
    FileContext::new(file, &commands, &options, &types).go_package()
}

#[test_case(Some("github.com/acme/game/login"), "game.login", "login" ; "import path")]
#[test_case(Some("github.com/acme/game;loginpb"), "game.login", "loginpb" ; "explicit name")]
#[test_case(Some("loginpb"), "game.login", "loginpb" ; "bare name")]
#[test_case(None, "game.login", "game_login" ; "package fallback")]
#[test_case(Some(""), "game.login", "game_login" ; "empty option")]
#[test_case(None, "", "login" ; "stem fallback")]
fn FileContext___go_package___resolves_name(
    go_package: Option<&str>,
    package: &str,
    expected: &str,
) {
    let file = FileUnit::new("game/login.proto")
        .with_package(package)
        .with_options(FileOptions {
            go_package: go_package.map(str::to_string),
            java_package: None,
        });

    assert_eq!(package_for(&file), expected);
}

#[test]
fn write_banner___names_source_file() {
    let file = FileUnit::new("game/login.proto");
    let mut w = CodeWriter::new(cmdgen_core::Indent::FourSpaces);

    write_banner(&mut w, &file).unwrap();

    assert_eq!(
        w.into_string(),
        "// Code generated by protoc-gen-cmd. DO NOT EDIT.\n// source: game/login.proto\n\n"
    );
}

#[test]
fn FileContext___writer___honors_use_tabs() {
    let file = FileUnit::new("a.proto");
    let commands = CommandIds::default();
    let options = GeneratorOptions::from_parameter("usetabs");
    let types = TypeMaps::default();
    let ctx = FileContext::new(&file, &commands, &options, &types);

    let mut w = ctx.writer();
    w.block("x", |w| w.writeln("y")).unwrap();

    assert_eq!(w.into_string(), "x {\n\ty\n}\n");
}
