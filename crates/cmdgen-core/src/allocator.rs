//! Deterministic command identifier allocation.
//!
//! Identifiers are a pure function of the name-sorted message list and the
//! file's application id:
//!
//! ```text
//! base = 0x1000 * app_id
//! while base < message_count { base <<= 4 }
//! first id = base + 1, then +1 per command message in name order
//! ```
//!
//! The shift keeps the identifier block wider than the number of messages the
//! file could ever need while preserving a recognizable hexadecimal prefix for
//! the application.
//!
//! The allocator expects messages already sorted by name; see
//! [`FileUnit::with_sorted_messages`].

use crate::error::{GenError, GenResult};
use crate::model::FileUnit;
use crate::naming::to_pascal_case;
use crate::view::{CommandKind, DescriptorView, command_kind};
use serde::Serialize;
use std::collections::HashMap;

/// Width of the identifier block reserved per application id.
pub const APP_ID_STRIDE: u64 = 0x1000;

/// Largest identifier the generated code can hold.
const MAX_COMMAND_ID: u64 = i32::MAX as u64;

/// Compute the base offset of a file's identifier block.
///
/// An application id of zero gives a zero base. That base is kept for an empty
/// file, otherwise the loop restarts it at one so the shift can make progress.
pub fn base_offset(app_id: u32, message_count: usize) -> u64 {
    let count = message_count as u64;
    let mut base = APP_ID_STRIDE * u64::from(app_id);
    while base < count {
        base = if base == 0 { 1 } else { base.saturating_mul(16) };
    }
    base
}

/// Format an identifier the way every target prints it.
pub fn hex_id(id: u32) -> String {
    format!("0x{id:X}")
}

/// One message and the identifier assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandAssignment {
    /// Message name as declared.
    pub name: String,

    pub id: u32,

    /// Command kind, `None` for plain messages numbered by [`allocate_all`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommandKind>,
}

/// Identifier assignments for one file, in allocation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CommandIds {
    base: u64,
    assignments: Vec<CommandAssignment>,
}

impl CommandIds {
    /// Base offset the run started from.
    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandAssignment> {
        self.assignments.iter()
    }

    /// Look up the identifier of a message by name.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.assignments
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.id)
    }
}

impl<'a> IntoIterator for &'a CommandIds {
    type Item = &'a CommandAssignment;
    type IntoIter = std::slice::Iter<'a, CommandAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Assign a dense identifier run to the file's command messages.
///
/// Plain messages are skipped and do not consume an identifier. Fails with
/// [`GenError::NameCollision`] when two messages share an exported name.
pub fn allocate(file: &FileUnit) -> GenResult<CommandIds> {
    number(file, true)
}

/// Assign identifiers to every message, command or not.
///
/// Uses the same base as [`allocate`] but its own counter, so the numbers
/// intentionally differ from the command table once plain messages are
/// interleaved.
pub fn allocate_all(file: &FileUnit) -> GenResult<CommandIds> {
    number(file, false)
}

fn number(file: &FileUnit, commands_only: bool) -> GenResult<CommandIds> {
    check_exported_names(file)?;

    let app_id = DescriptorView::new(file).app_id();
    let app_id = u32::try_from(app_id).map_err(|_| GenError::InvalidAppId {
        file: file.name.clone(),
        app_id,
    })?;

    let base = base_offset(app_id, file.messages.len());
    let mut next = base + 1;
    let mut assignments = Vec::new();

    for message in &file.messages {
        let kind = command_kind(&message.name);
        if commands_only && kind.is_none() {
            continue;
        }

        if next > MAX_COMMAND_ID {
            return Err(GenError::CommandIdOverflow {
                file: file.name.clone(),
                message: message.name.clone(),
                id: next,
            });
        }

        assignments.push(CommandAssignment {
            name: message.name.clone(),
            id: next as u32,
            kind,
        });
        next += 1;
    }

    tracing::trace!(
        file = %file.name,
        app_id,
        base = %format!("0x{base:X}"),
        assigned = assignments.len(),
        "allocated command ids"
    );

    Ok(CommandIds { base, assignments })
}

/// Every emitter spells message names through [`to_pascal_case`], so two
/// distinct names with one spelling would emit duplicate declarations.
fn check_exported_names(file: &FileUnit) -> GenResult<()> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(file.messages.len());
    for message in &file.messages {
        let identifier = to_pascal_case(&message.name);
        match seen.get(identifier.as_str()) {
            Some(&first) if first != message.name => {
                return Err(GenError::NameCollision {
                    file: file.name.clone(),
                    first: first.to_string(),
                    second: message.name.clone(),
                    identifier,
                });
            }
            Some(_) => {}
            None => {
                seen.insert(identifier, &message.name);
            }
        }
    }
    Ok(())
}


#[cfg(test)]
#[path = "allocator/allocator_parameterized_tests.rs"]
mod allocator_parameterized_tests;
