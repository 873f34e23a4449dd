//! Java `MessageTypes`: identifiers for every message plus lookup maps.
//!
//! Unlike the command targets this numbers all messages, plain ones
//! included, with [`allocate_all`]. The two numberings share a base but not
//! a counter, so a command's id here can differ from its id in the Go table.

use crate::emitter::{Emitter, FileContext, write_banner};
use cmdgen_core::naming::to_pascal_case;
use cmdgen_core::{FileUnit, GenResult, Target, allocate_all, hex_id};

const NAME_BY_ID: &str = "messageTypeToMessageNameMapping";
const ID_BY_NAME: &str = "messageNameToMessageTypeMapping";

pub struct MessageTypes;

impl MessageTypes {
    /// `pkg` parameter, then the `java_package` file option, then the file package.
    fn package<'a>(ctx: &FileContext<'a>) -> &'a str {
        ctx.options
            .java_package
            .as_deref()
            .or(ctx.file.options.java_package.as_deref())
            .unwrap_or(&ctx.file.package)
    }
}

impl Emitter for MessageTypes {
    fn target(&self) -> Target {
        Target::Java
    }

    fn file_name(&self, _file: &FileUnit) -> String {
        "MessageTypes.java".to_string()
    }

    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String> {
        let ids = allocate_all(ctx.file)?;

        let mut w = ctx.writer();
        write_banner(&mut w, ctx.file)?;

        let package = Self::package(ctx);
        if !package.is_empty() {
            crate::cw_writeln!(w, "package {package};")?;
            w.blank_line()?;
        }
        w.writeln("import java.util.HashMap;")?;
        w.writeln("import java.util.Map;")?;
        w.blank_line()?;

        w.block("public class MessageTypes", |w| {
            for message in &ids {
                crate::cw_writeln!(
                    w,
                    "public static final int {} = {};",
                    to_pascal_case(&message.name),
                    hex_id(message.id)
                )?;
            }
            if !ids.is_empty() {
                w.blank_line()?;
            }

            crate::cw_writeln!(
                w,
                "private static final Map<Integer, String> {NAME_BY_ID} = new HashMap<Integer, String>();"
            )?;
            crate::cw_writeln!(
                w,
                "private static final Map<String, Integer> {ID_BY_NAME} = new HashMap<String, Integer>();"
            )?;
            w.blank_line()?;

            w.block("static", |w| {
                for message in &ids {
                    let constant = to_pascal_case(&message.name);
                    crate::cw_writeln!(w, "{NAME_BY_ID}.put({constant}, \"{}\");", message.name)?;
                    crate::cw_writeln!(w, "{ID_BY_NAME}.put(\"{}\", {constant});", message.name)?;
                }
                Ok(())
            })?;
            w.blank_line()?;

            w.block("public static String getMessageTypeName(int messageTypeId)", |w| {
                crate::cw_writeln!(w, "return {NAME_BY_ID}.get(messageTypeId);")
            })?;
            w.blank_line()?;
            w.block("public static Integer getMessageTypeId(String messageTypeName)", |w| {
                crate::cw_writeln!(w, "return {ID_BY_NAME}.get(messageTypeName);")
            })
        })?;

        Ok(w.into_string())
    }
}
