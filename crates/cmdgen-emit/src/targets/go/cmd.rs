//! `<stem>.cmd.go`: identifier constants and the display-name table.

use super::{cmd_const, output_name, write_header};
use crate::emitter::{Emitter, FileContext};
use cmdgen_core::naming::to_pascal_case;
use cmdgen_core::{FileUnit, GenResult, Target, hex_id};

pub struct CommandTable;

impl Emitter for CommandTable {
    fn target(&self) -> Target {
        Target::Cmd
    }

    fn file_name(&self, file: &FileUnit) -> String {
        output_name(file, "cmd")
    }

    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String> {
        let mut w = ctx.writer();
        write_header(&mut w, ctx)?;

        if !ctx.commands.is_empty() {
            w.writeln("const (")?;
            {
                let _indent = w.indent();
                for command in ctx.commands {
                    let name = cmd_const(&command.name);
                    crate::cw_writeln!(w, "{name} = {}", hex_id(command.id))?;
                }
            }
            w.writeln(")")?;
            w.blank_line()?;
        }

        // Emitted even when the file has no commands.
        w.writeln("var CmdName = map[int32]string{")?;
        {
            let _indent = w.indent();
            for command in ctx.commands {
                let tag = command
                    .kind
                    .map(|kind| format!("<<{kind}>> "))
                    .unwrap_or_default();
                crate::cw_writeln!(
                    w,
                    "{}: \"{tag}{}\",",
                    cmd_const(&command.name),
                    to_pascal_case(&command.name)
                )?;
            }
        }
        w.writeln("}")?;

        Ok(w.into_string())
    }
}
