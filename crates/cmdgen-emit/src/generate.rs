//! Generation orchestrator.
//!
//! For each file, in input order: sort its messages, allocate command ids,
//! then run every enabled emitter in [`Target`] order. The result holds
//! exactly `files × targets` artifacts, file-major.

use crate::emitter::{FileContext, TypeMaps};
use crate::targets::emitter_for;
use cmdgen_core::{FileUnit, GenResult, GeneratedFile, GeneratorOptions, Target, allocate};

/// Run the enabled targets over `files`.
///
/// Fails with [`GenError::NoTargets`](cmdgen_core::GenError::NoTargets)
/// before touching any file when nothing is enabled.
pub fn generate(files: &[FileUnit], options: &GeneratorOptions) -> GenResult<Vec<GeneratedFile>> {
    options.require_targets()?;

    let types = TypeMaps::default();
    let mut artifacts = Vec::with_capacity(files.len() * options.targets.len());
    for file in files {
        artifacts.extend(generate_file(file, options, &types)?);
    }

    let targets: Vec<&str> = options.enabled_targets().map(Target::token).collect();
    tracing::info!(
        files = files.len(),
        targets = %targets.join(","),
        artifacts = artifacts.len(),
        "generation complete"
    );

    Ok(artifacts)
}

/// Run the enabled targets over a single file.
pub fn generate_file(
    file: &FileUnit,
    options: &GeneratorOptions,
    types: &TypeMaps,
) -> GenResult<Vec<GeneratedFile>> {
    let sorted = file.with_sorted_messages();
    let commands = allocate(&sorted)?;
    let ctx = FileContext::new(&sorted, &commands, options, types);

    tracing::debug!(
        file = %file.name,
        messages = sorted.messages.len(),
        commands = commands.len(),
        base = %format!("0x{:X}", commands.base()),
        "processing file"
    );

    options
        .enabled_targets()
        .map(|target| {
            let artifact = emitter_for(target).emit(&ctx)?;
            tracing::debug!(
                target = %target,
                name = %artifact.name,
                bytes = artifact.content.len(),
                "emitted artifact"
            );
            Ok(artifact)
        })
        .collect()
}
