//! `<stem>.resp.go`: reply helpers over a pooled `ResponseMessage`.
//!
//! Every helper funnels into one `reply` function that takes an envelope
//! from the pool, overwrites all of its fields, serializes it and clears it
//! again before it goes back. A pooled envelope never carries data from an
//! earlier reply.
//!
//! The schema is expected to declare `ResponseMessage` and a `CODE` enum
//! with `CODE_SUCCESS`.

use super::{cmd_const, output_name, write_header};
use crate::emitter::{Emitter, FileContext};
use cmdgen_core::naming::to_pascal_case;
use cmdgen_core::{FileUnit, GenResult, Target};

const GOGO_PROTO_IMPORT: &str = "import \"github.com/gogo/protobuf/proto\"";

pub struct ReplyHelpers;

impl Emitter for ReplyHelpers {
    fn target(&self) -> Target {
        Target::GoReply
    }

    fn file_name(&self, file: &FileUnit) -> String {
        output_name(file, "resp")
    }

    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String> {
        let proto3 = ctx.file.is_proto3();
        let mut w = ctx.writer();
        write_header(&mut w, ctx)?;

        w.writeln("import \"sync\"")?;
        w.blank_line()?;
        if !proto3 {
            w.writeln(GOGO_PROTO_IMPORT)?;
            w.blank_line()?;
        }

        w.writeln(
            "var msgPool = sync.Pool{New: func() interface{} { return new(ResponseMessage) }}",
        )?;
        w.blank_line()?;

        // proto2 envelope fields are pointers.
        let (message_type, error_code) = if proto3 {
            ("cmd", "code")
        } else {
            ("proto.Int32(cmd)", "code.Enum()")
        };

        w.block("func reply(cmd int32, code CODE, body []byte) []byte", |w| {
            w.writeln("resp := msgPool.Get().(*ResponseMessage)")?;
            w.writeln("defer func() {")?;
            {
                let _indent = w.indent();
                w.writeln("*resp = ResponseMessage{}")?;
                w.writeln("msgPool.Put(resp)")?;
            }
            w.writeln("}()")?;
            w.writeln("*resp = ResponseMessage{")?;
            {
                let _indent = w.indent();
                crate::cw_writeln!(w, "MessageType: {message_type},")?;
                crate::cw_writeln!(w, "ErrorCode: {error_code},")?;
                w.writeln("Body: body,")?;
            }
            w.writeln("}")?;
            w.writeln("return resp.Bytes()")
        })?;

        for command in ctx.commands {
            let name = to_pascal_case(&command.name);
            let id = cmd_const(&command.name);

            w.blank_line()?;
            w.block(&format!("func Reply{name}Err(errCode CODE) []byte"), |w| {
                crate::cw_writeln!(w, "return reply({id}, errCode, nil)")
            })?;
            w.blank_line()?;
            w.block(&format!("func Reply{name}Ok() []byte"), |w| {
                crate::cw_writeln!(w, "return reply({id}, CODE_SUCCESS, nil)")
            })?;
            w.blank_line()?;
            w.block(&format!("func Reply{name}OkWith(msg *{name}) []byte"), |w| {
                crate::cw_writeln!(w, "return reply({id}, CODE_SUCCESS, msg.Bytes())")
            })?;
        }

        Ok(w.into_string())
    }
}
