//! `<stem>.pack.go`: one constructor and one serializer per message.
//!
//! ```go
//! func NewLoginRequest(ACCOUNT string, TOKEN []byte) *LoginRequest {
//!     return &LoginRequest{
//!         Account: &ACCOUNT,
//!         Token: TOKEN,
//!     }
//! }
//! ```
//!
//! In proto2 files singular scalars (except `bytes`) and singular enums are
//! pointer fields, so the constructor stores their address. proto3 fields are
//! plain values. Repeated fields are slices in both.

use super::{output_name, write_header};
use crate::emitter::{Emitter, FileContext};
use cmdgen_core::naming::{to_argument_name, to_pascal_case};
use cmdgen_core::{Field, FieldType, FileUnit, GenResult, MessageType, ScalarKind, Target};

pub struct PackHelpers;

/// One constructor argument and the struct field it initializes.
struct Argument {
    name: String,
    ty: String,
    attribute: String,
    value: String,
}

impl Argument {
    fn resolve(ctx: &FileContext<'_>, message: &MessageType, field: &Field) -> GenResult<Self> {
        let resolved = ctx.view().resolve_field_type(message, field, &ctx.types.go)?;
        let name = to_argument_name(&field.name);

        let mut ty = if resolved.builtin {
            resolved.name
        } else if resolved.is_enum {
            to_pascal_case(&resolved.name)
        } else {
            format!("*{}", to_pascal_case(&resolved.name))
        };
        if field.is_repeated() {
            ty = format!("[]{ty}");
        }

        let pointer_field = !ctx.file.is_proto3()
            && !field.is_repeated()
            && (resolved.is_enum
                || (resolved.builtin && field.ty != FieldType::Scalar(ScalarKind::Bytes)));
        let value = if pointer_field {
            format!("&{name}")
        } else {
            name.clone()
        };

        Ok(Self {
            name,
            ty,
            attribute: to_pascal_case(&field.name),
            value,
        })
    }
}

impl Emitter for PackHelpers {
    fn target(&self) -> Target {
        Target::Pack
    }

    fn file_name(&self, file: &FileUnit) -> String {
        output_name(file, "pack")
    }

    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String> {
        let mut w = ctx.writer();
        write_header(&mut w, ctx)?;

        for (index, message) in ctx.file.messages.iter().enumerate() {
            if index > 0 {
                w.blank_line()?;
            }

            let type_name = to_pascal_case(&message.name);
            let arguments = message
                .fields
                .iter()
                .map(|field| Argument::resolve(ctx, message, field))
                .collect::<GenResult<Vec<_>>>()?;

            crate::cw_write!(w, "func New{type_name}(")?;
            w.write_separated(&arguments, ", ", |w, arg| {
                crate::cw_write!(w, "{} {}", arg.name, arg.ty)
            })?;
            crate::cw_writeln!(w, ") *{type_name} {{")?;
            {
                let _indent = w.indent();
                if arguments.is_empty() {
                    crate::cw_writeln!(w, "return &{type_name}{{}}")?;
                } else {
                    crate::cw_writeln!(w, "return &{type_name}{{")?;
                    {
                        let _indent = w.indent();
                        for arg in &arguments {
                            crate::cw_writeln!(w, "{}: {},", arg.attribute, arg.value)?;
                        }
                    }
                    w.writeln("}")?;
                }
            }
            w.writeln("}")?;
            w.blank_line()?;

            w.block(&format!("func (m *{type_name}) Bytes() []byte"), |w| {
                w.writeln("data, err := m.Marshal()")?;
                w.block("if err != nil", |w| w.writeln("panic(err)"))?;
                w.writeln("return data")
            })?;
        }

        Ok(w.into_string())
    }
}
