//! One emitter per output target.

mod actionscript;
mod go;
mod java;
mod typescript;

use crate::emitter::Emitter;
use cmdgen_core::Target;

/// The emitter that renders `target`.
pub fn emitter_for(target: Target) -> &'static dyn Emitter {
    match target {
        Target::Cmd => &go::CommandTable,
        Target::Pack => &go::PackHelpers,
        Target::Unpack => &go::UnpackDispatch,
        Target::ActionScript => &actionscript::ProtocolConstants,
        Target::Java => &java::MessageTypes,
        Target::TsCmd => &typescript::CommandConstants,
        Target::TsBuilder => &typescript::BuilderTable,
        Target::TsModel => &typescript::ModelClasses,
        Target::GoReply => &go::ReplyHelpers,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::emitter_for;
    use crate::emitter::{FileContext, TypeMaps};
    use cmdgen_core::{
        EnumType, Field, FieldType, FileUnit, GenResult, GeneratorOptions, MessageType,
        ScalarKind, Target, allocate,
    };

    /// Render one target for one file the way the orchestrator would.
    pub fn try_render(target: Target, file: &FileUnit, parameter: &str) -> GenResult<String> {
        let sorted = file.with_sorted_messages();
        let commands = allocate(&sorted)?;
        let options = GeneratorOptions::from_parameter(parameter);
        let types = TypeMaps::default();
        let ctx = FileContext::new(&sorted, &commands, &options, &types);
        emitter_for(target).render(&ctx)
    }

    pub fn render(target: Target, file: &FileUnit) -> String {
        try_render(target, file, "").unwrap()
    }

    /// A proto2 login schema with application id 2.
    ///
    /// Sorted order is LoginRequest, LoginResponse, PingEvent, Player,
    /// ResponseMessage; the first three are commands at 0x2001..=0x2003.
    pub fn login_file() -> FileUnit {
        FileUnit::new("game/login.proto")
            .with_package("game.login")
            .with_enum(EnumType::new("App").with_value("Id", 2))
            .with_enum(
                EnumType::new("CODE")
                    .with_value("CODE_SUCCESS", 0)
                    .with_value("CODE_FAILED", 1),
            )
            .with_message(
                MessageType::new("Player")
                    .with_field(Field::scalar("id", ScalarKind::Int64))
                    .with_field(Field::scalar("name", ScalarKind::String))
                    .with_field(Field::scalar("tags", ScalarKind::String).repeated())
                    .with_field(
                        Field::new("items", FieldType::Message(".game.login.Item".into()))
                            .repeated(),
                    ),
            )
            .with_message(
                MessageType::new("LoginResponse")
                    .with_field(Field::new("code", FieldType::Enum(".game.login.CODE".into())))
                    .with_field(Field::new(
                        "player",
                        FieldType::Message(".game.login.Player".into()),
                    )),
            )
            .with_message(
                MessageType::new("LoginRequest")
                    .with_field(Field::scalar("account", ScalarKind::String))
                    .with_field(Field::scalar("token", ScalarKind::Bytes)),
            )
            .with_message(MessageType::new("PingEvent"))
            .with_message(
                MessageType::new("ResponseMessage")
                    .with_field(Field::scalar("message_type", ScalarKind::Int32))
                    .with_field(Field::new(
                        "error_code",
                        FieldType::Enum(".game.login.CODE".into()),
                    ))
                    .with_field(Field::scalar("body", ScalarKind::Bytes)),
            )
    }
}
