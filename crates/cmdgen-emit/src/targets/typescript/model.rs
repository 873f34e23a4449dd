//! `proto.model.ts`: enums and one field-only class per message.

use crate::emitter::{Emitter, FileContext, write_banner};
use cmdgen_core::naming::to_pascal_case;
use cmdgen_core::{FileUnit, GenResult, Target};

/// Transport envelopes, handled by the runtime rather than modelled.
const ENVELOPE_MESSAGES: [&str; 2] = ["RequestMessage", "ResponseMessage"];

pub struct ModelClasses;

impl Emitter for ModelClasses {
    fn target(&self) -> Target {
        Target::TsModel
    }

    fn file_name(&self, _file: &FileUnit) -> String {
        "proto.model.ts".to_string()
    }

    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String> {
        let view = ctx.view();
        let messages: Vec<_> = ctx
            .file
            .messages
            .iter()
            .filter(|m| !ENVELOPE_MESSAGES.contains(&m.name.as_str()))
            .collect();

        // Resolve up front so a mapping gap fails before any text is written.
        let mut classes = Vec::with_capacity(messages.len());
        for message in messages {
            let mut fields = Vec::with_capacity(message.fields.len());
            for field in &message.fields {
                let resolved = view.resolve_field_type(message, field, &ctx.types.typescript)?;
                let ty = if resolved.builtin {
                    resolved.name
                } else {
                    to_pascal_case(&resolved.name)
                };
                let ty = if field.is_repeated() {
                    format!("Array<{ty}>")
                } else {
                    ty
                };
                fields.push((field.name.as_str(), ty));
            }
            classes.push((to_pascal_case(&message.name), fields));
        }

        let mut w = ctx.writer();
        write_banner(&mut w, ctx.file)?;
        w.block("module proto.model", |w| {
            let mut first = true;
            for enum_type in &ctx.file.enums {
                if !first {
                    w.blank_line()?;
                }
                first = false;
                w.block(&format!("export enum {}", to_pascal_case(&enum_type.name)), |w| {
                    for value in &enum_type.values {
                        crate::cw_writeln!(w, "{} = {},", value.name, value.number)?;
                    }
                    Ok(())
                })?;
            }
            for (name, fields) in &classes {
                if !first {
                    w.blank_line()?;
                }
                first = false;
                w.block(&format!("export class {name}"), |w| {
                    for (field, ty) in fields {
                        crate::cw_writeln!(w, "public {field}: {ty};")?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })?;
        Ok(w.into_string())
    }
}
