//! ActionScript `ProtocolType` command constants.

use crate::emitter::{Emitter, FileContext, write_banner};
use cmdgen_core::naming::to_pascal_case;
use cmdgen_core::{FileUnit, GenResult, Target, hex_id};

pub struct ProtocolConstants;

impl Emitter for ProtocolConstants {
    fn target(&self) -> Target {
        Target::ActionScript
    }

    fn file_name(&self, _file: &FileUnit) -> String {
        "ProtocolType.as".to_string()
    }

    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String> {
        let namespace = ctx
            .options
            .as_namespace
            .as_deref()
            .unwrap_or(&ctx.file.package);
        let header = if namespace.is_empty() {
            "package".to_string()
        } else {
            format!("package {namespace}")
        };

        let mut w = ctx.writer();
        write_banner(&mut w, ctx.file)?;
        w.block(&header, |w| {
            w.block("public class ProtocolType", |w| {
                for command in ctx.commands {
                    crate::cw_writeln!(
                        w,
                        "public static const {} : int = {};",
                        to_pascal_case(&command.name),
                        hex_id(command.id)
                    )?;
                }
                Ok(())
            })
        })?;

        Ok(w.into_string())
    }
}
