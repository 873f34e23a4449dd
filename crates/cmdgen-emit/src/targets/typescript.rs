//! TypeScript artifacts: command constants, the builder registration table
//! and model declarations, all as internal `module` blocks.

mod builder;
mod cmd;
mod model;

pub(crate) use builder::BuilderTable;
pub(crate) use cmd::CommandConstants;
pub(crate) use model::ModelClasses;
