//! cmdgen-emit - Target emitters for the cmdgen protoc plugin
//!
//! This crate turns the shared model from `cmdgen-core` into text:
//! - [`Emitter`] is the one capability every target implements
//! - [`emitter_for`] maps each [`Target`](cmdgen_core::Target) to its emitter
//! - [`generate`] runs the enabled emitters over a list of files
//! - [`code_writer::CodeWriter`] keeps indentation consistent across targets
//!
//! # Example
//!
//! ```
//! use cmdgen_core::{FileUnit, GeneratorOptions, MessageType, Target};
//!
//! let file = FileUnit::new("login.proto")
//!     .with_package("login")
//!     .with_message(MessageType::new("LoginRequest"));
//! let options = GeneratorOptions::default().with_target(Target::Cmd);
//!
//! let artifacts = cmdgen_emit::generate(&[file], &options).unwrap();
//!
//! assert_eq!(artifacts[0].name, "login.cmd.go");
//! assert!(artifacts[0].content.contains("Cmd_LoginRequest = 0x1001"));
//! ```

pub mod code_writer;
mod emitter;
mod generate;
mod targets;

pub use emitter::{Emitter, FileContext, TypeMaps, write_banner};
pub use generate::{generate, generate_file};
pub use targets::emitter_for;
