//! `<stem>.unpack.go`: decode a payload by its command id.

use super::{cmd_const, output_name, write_header};
use crate::emitter::{Emitter, FileContext};
use cmdgen_core::naming::to_pascal_case;
use cmdgen_core::{FileUnit, GenResult, Target};

pub struct UnpackDispatch;

impl Emitter for UnpackDispatch {
    fn target(&self) -> Target {
        Target::Unpack
    }

    fn file_name(&self, file: &FileUnit) -> String {
        output_name(file, "unpack")
    }

    fn render(&self, ctx: &FileContext<'_>) -> GenResult<String> {
        let mut w = ctx.writer();
        write_header(&mut w, ctx)?;

        w.writeln("import \"fmt\"")?;
        w.blank_line()?;

        w.writeln("// UnknownCmdError is returned by Unpack for an unregistered command id.")?;
        w.block("type UnknownCmdError struct", |w| w.writeln("Cmd int32"))?;
        w.blank_line()?;
        w.block("func (e *UnknownCmdError) Error() string", |w| {
            w.writeln("return fmt.Sprintf(\"unknown cmd: 0x%X\", e.Cmd)")
        })?;
        w.blank_line()?;

        w.block("func Unpack(fromCmd int32, data []byte) (interface{}, error)", |w| {
            w.writeln("switch fromCmd {")?;
            for command in ctx.commands {
                crate::cw_writeln!(w, "case {}:", cmd_const(&command.name))?;
                let _indent = w.indent();
                crate::cw_writeln!(w, "pb := new({})", to_pascal_case(&command.name))?;
                w.writeln("err := pb.Unmarshal(data)")?;
                w.writeln("return pb, err")?;
            }
            w.writeln("default:")?;
            {
                let _indent = w.indent();
                w.writeln("return nil, &UnknownCmdError{Cmd: fromCmd}")?;
            }
            w.writeln("}")
        })?;

        Ok(w.into_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use crate::targets::fixtures::{login_file, render};
    use cmdgen_core::{FileUnit, MessageType, Target};

    #[test]
    fn UnpackDispatch___login_file___decodes_each_command() {
        let text = render(Target::Unpack, &login_file());

        assert!(text.contains(
            "    switch fromCmd {
    case Cmd_LoginRequest:
        pb := new(LoginRequest)
        err := pb.Unmarshal(data)
        return pb, err
    case Cmd_LoginResponse:
"
        ));
        assert!(text.contains("    case Cmd_PingEvent:\n"));
        assert!(!text.contains("case Cmd_Player:"));
    }

    #[test]
    fn UnpackDispatch___unknown_id___returns_typed_error() {
        let text = render(Target::Unpack, &login_file());

        assert!(text.contains("type UnknownCmdError struct {\n    Cmd int32\n}\n"));
        assert!(text.contains(
            "    default:\n        return nil, &UnknownCmdError{Cmd: fromCmd}\n    }\n}\n"
        ));
    }

    #[test]
    fn UnpackDispatch___no_commands___keeps_default_branch() {
        let file = FileUnit::new("config.proto")
            .with_package("config")
            .with_message(MessageType::new("GameConfig"));

        let text = render(Target::Unpack, &file);

        assert!(!text.contains("case "));
        assert!(text.contains("default:"));
    }

    #[test]
    fn UnpackDispatch___file_name___uses_stem() {
        let file = login_file();

        let name = crate::emitter_for(Target::Unpack).file_name(&file);

        assert_eq!(name, "game/login.unpack.go");
    }
}
