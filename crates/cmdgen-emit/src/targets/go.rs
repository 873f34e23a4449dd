//! Go artifacts: command table, constructors, dispatch and reply helpers.
//!
//! All four live in the package of the Go code protoc-gen-go (or gogo)
//! generates for the same schema, and refer to its message structs.

mod cmd;
mod pack;
mod reply;
mod unpack;

pub(crate) use cmd::CommandTable;
pub(crate) use pack::PackHelpers;
pub(crate) use reply::ReplyHelpers;
pub(crate) use unpack::UnpackDispatch;

use crate::code_writer::CodeWriter;
use crate::emitter::{FileContext, write_banner};
use cmdgen_core::FileUnit;
use cmdgen_core::naming::to_pascal_case;
use std::fmt;

/// Banner followed by the package clause.
fn write_header(w: &mut CodeWriter, ctx: &FileContext<'_>) -> fmt::Result {
    write_banner(w, ctx.file)?;
    crate::cw_writeln!(w, "package {}", ctx.go_package())?;
    w.blank_line()
}

/// `<stem>.<suffix>.go`
fn output_name(file: &FileUnit, suffix: &str) -> String {
    format!("{}.{suffix}.go", file.stem())
}

/// Name of the identifier constant of a command message.
fn cmd_const(message: &str) -> String {
    format!("Cmd_{}", to_pascal_case(message))
}
