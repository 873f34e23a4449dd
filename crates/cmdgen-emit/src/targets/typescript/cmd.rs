//! `proto.cmd.ts`: command identifiers under `proto.cmd`.

use crate::emitter::{Emitter, FileContext, write_banner};
use cmdgen_core::naming::to_pascal_case;
use cmdgen_core::{FileUnit, GenResult, Target, hex_id};

pub struct CommandConstants;

impl Emitter for CommandConstants {
    fn target(&self) -> Target {
        Target::TsCmd
    }

    fn file_name(&self, _file: &FileUnit) -> String {
        "proto.cmd.ts".to_string()
    }

    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String> {
        let mut w = ctx.writer();
        write_banner(&mut w, ctx.file)?;
        w.block("module proto.cmd", |w| {
            for command in ctx.commands {
                crate::cw_writeln!(
                    w,
                    "export var {}: number = {};",
                    to_pascal_case(&command.name),
                    hex_id(command.id)
                )?;
            }
            Ok(())
        })?;
        Ok(w.into_string())
    }
}
