//! Run-scoped generator state.
//!
//! A [`GeneratorContext`] is built once per run from the host options and
//! passed by reference to every emitter. [`Generator`] wraps the
//! uninitialized/initialized lifecycle for callers that hold the run before
//! the host options arrive.

use drizzlegen_core::{DateMode, Dmmf, GeneratorOptions};
use serde::Serialize;

use crate::config::{parse_config, Config, ImportFileExtension};
use crate::errors::GenerateError;

/// Extension that marks a single-file output path.
pub const SINGLE_FILE_EXTENSION: &str = ".ts";

/// Where generated code is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTarget {
    pub is_single_file: bool,
    pub path: String,
}

impl OutputTarget {
    /// Resolve the output target from the host options.
    pub fn resolve(options: &GeneratorOptions) -> Result<Self, GenerateError> {
        let path = options
            .generator
            .output_path()
            .ok_or(GenerateError::MissingOutputPath)?;

        Ok(Self {
            is_single_file: path.ends_with(SINGLE_FILE_EXTENSION),
            path: path.to_string(),
        })
    }
}

/// Parsed configuration, output target and the borrowed datamodel of a run.
#[derive(Debug, Clone)]
pub struct GeneratorContext<'a> {
    output: OutputTarget,
    dmmf: &'a Dmmf,
    config: Config,
}

impl<'a> GeneratorContext<'a> {
    /// Build the context for one run.
    ///
    /// Config issues are reported before a missing output path.
    pub fn initialize(options: &'a GeneratorOptions) -> Result<Self, GenerateError> {
        let config = parse_config(&options.generator.config)?;
        let output = OutputTarget::resolve(options)?;

        tracing::debug!(
            event = "context_initialized",
            output = %output.path,
            single_file = output.is_single_file
        );

        Ok(Self {
            output,
            dmmf: &options.dmmf,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub fn dmmf(&self) -> &'a Dmmf {
        self.dmmf
    }

    pub fn is_relational_query_enabled(&self) -> bool {
        self.config.relational_query
    }

    pub fn import_file_extension(&self) -> ImportFileExtension {
        self.config.import_file_extension
    }

    pub fn date_mode(&self) -> Option<DateMode> {
        self.config.date_mode
    }

    pub fn is_verbose(&self) -> bool {
        self.config.verbose
    }
}

/// A generation run that may not have been initialized yet.
#[derive(Debug, Default)]
pub struct Generator<'a> {
    context: Option<GeneratorContext<'a>>,
}

impl<'a> Generator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the run, replacing any previous context.
    ///
    /// On failure the previous context, if any, is kept.
    pub fn initialize(
        &mut self,
        options: &'a GeneratorOptions,
    ) -> Result<&GeneratorContext<'a>, GenerateError> {
        let context = GeneratorContext::initialize(options)?;
        Ok(&*self.context.insert(context))
    }

    /// The initialized context, or [`GenerateError::ContextNotSet`].
    pub fn context(&self) -> Result<&GeneratorContext<'a>, GenerateError> {
        self.context.as_ref().ok_or(GenerateError::ContextNotSet)
    }

    pub fn is_relational_query_enabled(&self) -> Result<bool, GenerateError> {
        Ok(self.context()?.is_relational_query_enabled())
    }

    pub fn import_file_extension(&self) -> Result<ImportFileExtension, GenerateError> {
        Ok(self.context()?.import_file_extension())
    }
}
