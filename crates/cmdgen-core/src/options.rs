//! Generator options and the closed set of output targets.
//!
//! Options start from defaults, may be layered with a TOML file, and are
//! finally overridden by the plugin parameter string protoc passes along
//! (`--cmd_out=cmd,pack,usetabs,pkg=com.example:out`).

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Output targets, declared in the order artifacts are emitted for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Target {
    /// Go command identifier table.
    #[serde(rename = "cmd")]
    Cmd,

    /// Go constructors and serializers.
    #[serde(rename = "pack")]
    Pack,

    /// Go dispatch deserializer.
    #[serde(rename = "unpack")]
    Unpack,

    /// ActionScript command constants.
    #[serde(rename = "as")]
    ActionScript,

    /// Java message type ids and lookup maps.
    #[serde(rename = "java")]
    Java,

    /// TypeScript command constants.
    #[serde(rename = "ts")]
    TsCmd,

    /// TypeScript registration table.
    #[serde(rename = "ts.pb")]
    TsBuilder,

    /// TypeScript enums and model classes.
    #[serde(rename = "ts.model")]
    TsModel,

    /// Go reply helpers.
    #[serde(rename = "go.resp")]
    GoReply,
}

impl Target {
    /// Every target in emission order.
    pub const ALL: [Target; 9] = [
        Target::Cmd,
        Target::Pack,
        Target::Unpack,
        Target::ActionScript,
        Target::Java,
        Target::TsCmd,
        Target::TsBuilder,
        Target::TsModel,
        Target::GoReply,
    ];

    /// Parameter token that selects the target.
    pub fn token(self) -> &'static str {
        match self {
            Target::Cmd => "cmd",
            Target::Pack => "pack",
            Target::Unpack => "unpack",
            Target::ActionScript => "as",
            Target::Java => "java",
            Target::TsCmd => "ts",
            Target::TsBuilder => "ts.pb",
            Target::TsModel => "ts.model",
            Target::GoReply => "go.resp",
        }
    }

    pub fn from_token(token: &str) -> Option<Target> {
        Target::ALL.into_iter().find(|t| t.token() == token)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Target {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::from_token(s).ok_or_else(|| GenError::Config(format!("unknown target: {s}")))
    }
}

/// Indentation unit of generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    FourSpaces,
    Tab,
}

impl Indent {
    pub fn as_str(self) -> &'static str {
        match self {
            Indent::FourSpaces => "    ",
            Indent::Tab => "\t",
        }
    }
}

/// Split a parameter string into `(key, value)` pairs.
///
/// Tokens are comma separated; `key=value` carries a value, a bare `flag`
/// does not. Empty tokens are dropped.
pub fn parse_parameter(parameter: &str) -> Vec<(String, Option<String>)> {
    parameter
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('=') {
            Some((key, value)) => (key.to_string(), Some(value.to_string())),
            None => (token.to_string(), None),
        })
        .collect()
}

/// A flag is on unless it is explicitly set to `false`.
fn flag_enabled(value: Option<&str>) -> bool {
    value != Some("false")
}

/// Options controlling one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Enabled targets; iteration follows [`Target::ALL`] order.
    pub targets: BTreeSet<Target>,

    /// Indent generated text with tabs instead of four spaces.
    pub use_tabs: bool,

    /// Namespace for the ActionScript target (defaults to the file package).
    pub as_namespace: Option<String>,

    /// Package for the Java target (defaults to the file's `java_package`
    /// option, then the file package).
    pub java_package: Option<String>,
}

impl GeneratorOptions {
    /// Options built from a parameter string alone.
    pub fn from_parameter(parameter: &str) -> Self {
        let mut options = Self::default();
        options.apply_parameter(parameter);
        options
    }

    /// Parse options from a TOML document.
    ///
    /// ```toml
    /// targets = ["cmd", "ts.pb"]
    /// use_tabs = true
    /// java_package = "com.example.proto"
    /// ```
    pub fn from_toml_str(content: &str) -> GenResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Layer a parameter string over the current options.
    ///
    /// Unknown keys are logged and ignored.
    pub fn apply_parameter(&mut self, parameter: &str) {
        for (key, value) in parse_parameter(parameter) {
            let value = value.as_deref();
            if let Some(target) = Target::from_token(&key) {
                if flag_enabled(value) {
                    self.targets.insert(target);
                } else {
                    self.targets.remove(&target);
                }
                continue;
            }

            match (key.as_str(), value) {
                ("usetabs", value) => self.use_tabs = flag_enabled(value),
                ("asns", Some(ns)) => self.as_namespace = Some(ns.to_string()),
                ("pkg", Some(pkg)) => self.java_package = Some(pkg.to_string()),
                ("asns" | "pkg", None) => {
                    tracing::warn!(key = %key, "parameter requires a value, ignoring");
                }
                _ => tracing::warn!(key = %key, "unknown parameter, ignoring"),
            }
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.insert(target);
        self
    }

    /// Enabled targets in emission order.
    pub fn enabled_targets(&self) -> impl Iterator<Item = Target> + '_ {
        self.targets.iter().copied()
    }

    /// Fail when no target is enabled.
    pub fn require_targets(&self) -> GenResult<()> {
        if self.targets.is_empty() {
            return Err(GenError::NoTargets);
        }
        Ok(())
    }

    pub fn indent(&self) -> Indent {
        if self.use_tabs {
            Indent::Tab
        } else {
            Indent::FourSpaces
        }
    }
}
