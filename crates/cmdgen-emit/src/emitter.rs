//! The emitter capability shared by every target.

use crate::code_writer::CodeWriter;
use cmdgen_core::naming::to_module_ident;
use cmdgen_core::{
    CommandIds, DescriptorView, FileUnit, GenResult, GeneratedFile, GeneratorOptions, Target,
    TypeMap,
};
use std::fmt;

/// Scalar type tables, built once per run.
#[derive(Debug, Clone)]
pub struct TypeMaps {
    pub go: TypeMap,
    pub typescript: TypeMap,
}

impl Default for TypeMaps {
    fn default() -> Self {
        Self {
            go: TypeMap::go(),
            typescript: TypeMap::typescript(),
        }
    }
}

/// Everything an emitter may read while rendering one file.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    /// The file, messages already sorted by name.
    pub file: &'a FileUnit,

    /// Command identifiers allocated over [`Self::file`].
    pub commands: &'a CommandIds,

    pub options: &'a GeneratorOptions,

    pub types: &'a TypeMaps,
}

impl<'a> FileContext<'a> {
    pub fn new(
        file: &'a FileUnit,
        commands: &'a CommandIds,
        options: &'a GeneratorOptions,
        types: &'a TypeMaps,
    ) -> Self {
        Self {
            file,
            commands,
            options,
            types,
        }
    }

    pub fn view(&self) -> DescriptorView<'a> {
        DescriptorView::new(self.file)
    }

    /// A writer using the configured indentation.
    pub fn writer(&self) -> CodeWriter {
        CodeWriter::new(self.options.indent())
    }

    /// Go package clause for the file.
    ///
    /// Taken from the `go_package` option (the name after `;`, or the last
    /// path segment), otherwise the file package with `.` replaced by `_`.
    pub fn go_package(&self) -> String {
        if let Some(go_package) = self.file.options.go_package.as_deref() {
            let name = match go_package.split_once(';') {
                Some((_, name)) => name,
                None => go_package.rsplit('/').next().unwrap_or(go_package),
            };
            if !name.is_empty() {
                return name.to_string();
            }
        }

        if self.file.package.is_empty() {
            to_module_ident(self.file.stem())
        } else {
            self.file.package.replace('.', "_")
        }
    }
}

/// A stateless renderer producing one artifact per file for one target.
pub trait Emitter {
    /// Target this emitter renders.
    fn target(&self) -> Target;

    /// Output path of the artifact for `file`.
    fn file_name(&self, file: &FileUnit) -> String;

    /// Render the artifact text.
    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String>;

    /// Render and name the artifact.
    fn emit(&self, ctx: &FileContext<'_>) -> GenResult<GeneratedFile> {
        let content = self.render(ctx)?;
        Ok(GeneratedFile::new(
            self.file_name(ctx.file),
            content,
            self.target(),
        ))
    }
}

/// Write the generated-code banner every artifact starts with.
pub fn write_banner(w: &mut CodeWriter, file: &FileUnit) -> fmt::Result {
    w.writeln("// Code generated by protoc-gen-cmd. DO NOT EDIT.")?;
    crate::cw_writeln!(w, "// source: {}", file.name)?;
    w.blank_line()
}

#[cfg(test)]
#[path = "emitter/emitter_tests.rs"]
mod emitter_tests;
