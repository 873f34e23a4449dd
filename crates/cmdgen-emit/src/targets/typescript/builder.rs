//! `proto.builder.ts`: one registration entry per command message.
//!
//! ```ts
//! export var LOGIN_LoginRequest = { cmd: proto.cmd.LoginRequest, cls: "proto.builder.LoginRequest" };
//! ```

use crate::emitter::{Emitter, FileContext, write_banner};
use cmdgen_core::naming::{to_module_ident, to_pascal_case};
use cmdgen_core::{FileUnit, GenResult, Target};

/// The login response is dispatched by hand, never through auto-listening.
const MANUAL_LISTEN_MESSAGE: &str = "LoginResponse";

pub struct BuilderTable;

impl Emitter for BuilderTable {
    fn target(&self) -> Target {
        Target::TsBuilder
    }

    fn file_name(&self, _file: &FileUnit) -> String {
        "proto.builder.ts".to_string()
    }

    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String> {
        let prefix = to_module_ident(ctx.file.stem()).to_uppercase();

        let mut w = ctx.writer();
        write_banner(&mut w, ctx.file)?;
        w.block("module proto", |w| {
            for command in ctx.commands {
                let name = &command.name;
                crate::cw_write!(
                    w,
                    "export var {prefix}_{name} = {{ cmd: proto.cmd.{}, cls: \"proto.builder.{name}\"",
                    to_pascal_case(name)
                )?;
                if name == MANUAL_LISTEN_MESSAGE {
                    w.write(", auto_listen: false")?;
                }
                w.writeln(" };")?;
            }
            Ok(())
        })?;
        Ok(w.into_string())
    }
}
