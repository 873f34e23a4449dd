//! Property-based tests for the generation orchestrator
//!
//! Tests that artifact counts and order follow the enabled targets, that
//! output is deterministic, and that every target agrees on command ids.

use cmdgen_core::{
    Field, FieldType, FileUnit, GeneratorOptions, MessageType, ScalarKind, Target, allocate,
    hex_id,
};
use cmdgen_emit::generate;
use proptest::prelude::*;
use std::collections::HashSet;

// Strategy: a message with a few scalar or reference fields
fn arb_message() -> impl Strategy<Value = MessageType> {
    (
        "[A-Z][a-z]{1,8}",
        prop_oneof![Just("Request"), Just("Response"), Just("Event"), Just("Info")],
        prop::collection::vec(
            (
                "[a-z]{1,8}",
                prop::sample::select(ScalarKind::ALL.to_vec()),
                any::<bool>(),
            ),
            0..5,
        ),
    )
        .prop_map(|(stem, suffix, fields)| {
            fields.into_iter().enumerate().fold(
                MessageType::new(format!("{stem}{suffix}")),
                |message, (index, (name, kind, repeated))| {
                    let name = format!("{name}{index}");
                    let field = if index == 3 {
                        Field::new(name, FieldType::Message(".x.Nested".into()))
                    } else {
                        Field::scalar(name, kind)
                    };
                    message.with_field(if repeated { field.repeated() } else { field })
                },
            )
        })
}

// Strategy: a file whose message names are distinct
fn arb_file(index: usize) -> impl Strategy<Value = FileUnit> {
    prop::collection::vec(arb_message(), 0..12).prop_map(move |messages| {
        let mut seen = HashSet::new();
        messages
            .into_iter()
            .filter(|message| seen.insert(message.name.clone()))
            .fold(
                FileUnit::new(format!("pkg/file{index}.proto")).with_package("pkg"),
                FileUnit::with_message,
            )
    })
}

fn arb_files() -> impl Strategy<Value = Vec<FileUnit>> {
    (0usize..4).prop_flat_map(|count| (0..count).map(arb_file).collect::<Vec<_>>())
}

fn arb_options() -> impl Strategy<Value = GeneratorOptions> {
    (
        prop::sample::subsequence(Target::ALL.to_vec(), 1..=Target::ALL.len()),
        any::<bool>(),
    )
        .prop_map(|(targets, use_tabs)| {
            let mut options = targets
                .into_iter()
                .fold(GeneratorOptions::default(), GeneratorOptions::with_target);
            options.use_tabs = use_tabs;
            options
        })
}

proptest! {
    /// Property: artifact count is files times targets
    #[test]
    fn proptest_generate_count_is_files_times_targets(
        files in arb_files(),
        options in arb_options(),
    ) {
        let artifacts = generate(&files, &options).unwrap();

        prop_assert_eq!(artifacts.len(), files.len() * options.targets.len());
    }

    /// Property: artifacts are file-major, target-minor
    #[test]
    fn proptest_generate_order_is_file_major(
        files in arb_files(),
        options in arb_options(),
    ) {
        let artifacts = generate(&files, &options).unwrap();
        let targets: Vec<Target> = options.enabled_targets().collect();

        for (index, artifact) in artifacts.iter().enumerate() {
            prop_assert_eq!(artifact.target, targets[index % targets.len()]);
        }
    }

    /// Property: two runs over the same input are byte-identical
    #[test]
    fn proptest_generate_is_deterministic(
        files in arb_files(),
        options in arb_options(),
    ) {
        let first = generate(&files, &options).unwrap();
        let second = generate(&files, &options).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Property: Go, ActionScript and TypeScript tables carry the same ids
    #[test]
    fn proptest_command_targets_agree_on_ids(file in arb_file(0)) {
        let options = GeneratorOptions::from_parameter("cmd,as,ts");
        let ids = allocate(&file.with_sorted_messages()).unwrap();

        let artifacts = generate(std::slice::from_ref(&file), &options).unwrap();

        for command in &ids {
            let id = hex_id(command.id);
            let go = format!("Cmd_{} = {id}\n", command.name);
            let actionscript = format!("{} : int = {id};", command.name);
            let typescript = format!("{}: number = {id};", command.name);
            prop_assert!(artifacts[0].content.contains(&go));
            prop_assert!(artifacts[1].content.contains(&actionscript));
            prop_assert!(artifacts[2].content.contains(&typescript));
        }
    }
}
