#![allow(non_snake_case)]

use super::*;
use cmdgen_core::Target;
use prost::Message;
use prost_types::{DescriptorProto, FileDescriptorProto};

fn descriptor(name: &str, messages: &[&str]) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.into()),
        package: Some("game".into()),
        message_type: messages
            .iter()
            .map(|m| DescriptorProto {
                name: Some((*m).into()),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

fn request(generate: &[&str]) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: generate.iter().map(|s| s.to_string()).collect(),
        parameter: Some("cmd,pack".into()),
        proto_file: vec![
            descriptor("common.proto", &["Shared"]),
            descriptor("login.proto", &["LoginRequest"]),
            descriptor("chat.proto", &["SayRequest"]),
        ],
        ..Default::default()
    }
}

// GenerationRequest tests

#[test]
fn GenerationRequest___from_proto___keeps_only_requested_files() {
    let normalized = GenerationRequest::from_proto(request(&["login.proto"])).unwrap();

    assert_eq!(normalized.files.len(), 1);
    assert_eq!(normalized.files[0].name, "login.proto");
    assert_eq!(normalized.parameter, "cmd,pack");
}

#[test]
fn GenerationRequest___from_proto___follows_descriptor_order() {
    let normalized =
        GenerationRequest::from_proto(request(&["chat.proto", "login.proto"])).unwrap();

    let names: Vec<&str> = normalized.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["login.proto", "chat.proto"]);
}

#[test]
fn GenerationRequest___unknown_file___is_rejected() {
    let result = GenerationRequest::from_proto(request(&["missing.proto"]));

    assert!(matches!(result, Err(CodecError::UnknownFile(ref f)) if f == "missing.proto"));
}

#[test]
fn GenerationRequest___no_parameter___is_empty_string() {
    let mut raw = request(&["login.proto"]);
    raw.parameter = None;

    let normalized = GenerationRequest::from_proto(raw).unwrap();

    assert_eq!(normalized.parameter, "");
}

#[test]
fn GenerationRequest___selected_files___requires_at_least_one() {
    let normalized = GenerationRequest::from_proto(request(&[])).unwrap();

    let result = normalized.selected_files();

    assert!(matches!(result, Err(GenError::NoFilesToGenerate)));
}

#[test]
fn GenerationRequest___decode___reads_wire_bytes() {
    let bytes = request(&["login.proto"]).encode_to_vec();

    let normalized = GenerationRequest::decode(&bytes).unwrap();

    assert_eq!(normalized.selected_files().unwrap().len(), 1);
}

#[test]
fn GenerationRequest___decode___rejects_garbage() {
    let result = GenerationRequest::decode(&[0xFF, 0xFF, 0xFF]);

    assert!(matches!(result, Err(CodecError::Decode(_))));
}

// GenerationResponse tests

#[test]
fn GenerationResponse___success___lists_files_in_order() {
    let response = GenerationResponse::success(vec![
        GeneratedFile::new("login.cmd.go", "package game\n", Target::Cmd),
        GeneratedFile::new("login.pack.go", "package game\n", Target::Pack),
    ]);

    let proto = response.to_proto();

    let names: Vec<&str> = proto.file.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["login.cmd.go", "login.pack.go"]);
    assert_eq!(proto.file[0].content(), "package game\n");
    assert_eq!(proto.error, None);
}

#[test]
fn GenerationResponse___failure___carries_message_without_files() {
    let response = GenerationResponse::failure(&GenError::InvalidAppId {
        file: "bad.proto".into(),
        app_id: -4,
    });

    let proto = response.to_proto();

    assert!(proto.file.is_empty());
    assert_eq!(proto.error(), "invalid application id -4 in bad.proto");
}

#[test]
fn GenerationResponse___advertises_proto3_optional() {
    let proto = GenerationResponse::success(Vec::new()).to_proto();

    assert_eq!(proto.supported_features, Some(Feature::Proto3Optional as u64));
}

#[test]
fn GenerationResponse___to_bytes___decodes_with_prost() {
    let response = GenerationResponse::success(vec![GeneratedFile::new(
        "proto.cmd.ts",
        "module proto.cmd {\n}\n",
        Target::TsCmd,
    )]);

    let decoded = CodeGeneratorResponse::decode(response.to_bytes().as_slice()).unwrap();

    assert_eq!(decoded, response.to_proto());
}

#[test]
fn GenerationResponse___from_result___maps_both_arms() {
    let ok: GenResult<Vec<GeneratedFile>> = Ok(Vec::new());
    let err: GenResult<Vec<GeneratedFile>> = Err(GenError::NoTargets);

    let ok = GenerationResponse::from(ok);
    let err = GenerationResponse::from(err);

    assert_eq!(ok, GenerationResponse::Success(Vec::new()));
    assert!(matches!(err, GenerationResponse::Failure(ref m) if m.starts_with("no output target")));
}
