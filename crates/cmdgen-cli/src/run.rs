//! One plugin run: read the request, generate, write the response.

use anyhow::{Context, bail};
use cmdgen_core::{CommandIds, FileUnit, GenError, GeneratorOptions, allocate};
use cmdgen_transport::{GenerationRequest, GenerationResponse};
use serde::Serialize;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Where the run reads from and writes to, and how it is configured.
#[derive(Debug, Default)]
pub struct Invocation {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub parameter: Option<String>,
    pub config: Option<PathBuf>,
    pub describe: bool,
}

/// A normalized file with the ids its command messages receive.
#[derive(Debug, Serialize)]
struct FileDescription<'a> {
    file: &'a FileUnit,
    commands: CommandIds,
}

pub fn run(invocation: &Invocation) -> anyhow::Result<()> {
    let input = read_input(invocation.input.as_deref())?;
    let request = GenerationRequest::decode(&input).context("failed to decode the request")?;

    let options = load_options(invocation, &request.parameter)?;
    let files = request.selected_files().map_err(fatal)?;

    if invocation.describe {
        let json = describe(files)?;
        return write_output(invocation.output.as_deref(), json.as_bytes());
    }

    let response = match cmdgen_emit::generate(files, &options) {
        Ok(generated) => GenerationResponse::success(generated),
        Err(err) if err.is_configuration_error() => return Err(fatal(err)),
        Err(err) => {
            tracing::error!(code = err.error_code(), "{err}");
            GenerationResponse::failure(&err)
        }
    };

    write_output(invocation.output.as_deref(), &response.to_bytes())
}

/// Defaults, then the TOML file, then the parameter string.
fn load_options(
    invocation: &Invocation,
    request_parameter: &str,
) -> anyhow::Result<GeneratorOptions> {
    let mut options = match &invocation.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            GeneratorOptions::from_toml_str(&content)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => GeneratorOptions::default(),
    };

    let parameter = invocation.parameter.as_deref().unwrap_or(request_parameter);
    options.apply_parameter(parameter);

    if !invocation.describe {
        options.require_targets().map_err(fatal)?;
    }

    tracing::debug!(
        targets = ?options.targets,
        use_tabs = options.use_tabs,
        "options resolved"
    );
    Ok(options)
}

fn describe(files: &[FileUnit]) -> anyhow::Result<String> {
    let descriptions = files
        .iter()
        .map(|file| {
            Ok(FileDescription {
                file,
                commands: allocate(&file.with_sorted_messages())?,
            })
        })
        .collect::<Result<Vec<_>, GenError>>()?;

    let mut json = serde_json::to_string_pretty(&descriptions)?;
    json.push('\n');
    Ok(json)
}

fn fatal(err: GenError) -> anyhow::Error {
    anyhow::Error::new(err).context("invalid plugin invocation")
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read request {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read request from stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data).context("failed to write response to stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}
