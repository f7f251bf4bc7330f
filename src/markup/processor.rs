//! Processing API for markup sources
//!
//! A format string names a stage (what data to extract) and an output format (how to
//! render it): `token-simple`, `token-json`, `tree-print`, `tree-markup`,
//! `tree-treeviz`, `tree-json` and `tree-yaml`.
//!
//! ```rust,ignore
//! use markup_tree::markup::processor::{process_source, ProcessOptions, ProcessingSpec};
//!
//! let spec = ProcessingSpec::from_string("tree-print")?;
//! let output = process_source("<p>hi</p>", &spec, &ProcessOptions::default())?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::markup::ast::{MalformedMarkupError, Node};
use crate::markup::config::MarkupConfig;
use crate::markup::formats::{
    print::DEFAULT_INDENT, serialize_markup, to_print_str_with_indent, to_treeviz_str,
    treeviz::DEFAULT_LABEL_WIDTH,
};
use crate::markup::lexer::{tokenize, Token};
use crate::markup::parser::{parse_with_mode, ParseMode};

/// Deepest tree the `tree-json` and `tree-yaml` formats will serialize. Serde walks the
/// tree recursively, so deeper trees are rejected instead of exhausting the stack.
pub const MAX_SERIALIZED_DEPTH: usize = 256;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Tree,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Print,
    Markup,
    Treeviz,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-json" or "tree-print"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "tree" => ProcessingStage::Tree,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "print" => OutputFormat::Print,
            "markup" => OutputFormat::Markup,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "'{}' is not supported for the {} stage",
                spec.format_name(),
                spec.stage_name()
            )));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let token = |format| ProcessingSpec {
            stage: ProcessingStage::Token,
            format,
        };
        let tree = |format| ProcessingSpec {
            stage: ProcessingStage::Tree,
            format,
        };

        vec![
            token(OutputFormat::Simple),
            token(OutputFormat::Json),
            tree(OutputFormat::Print),
            tree(OutputFormat::Markup),
            tree(OutputFormat::Treeviz),
            tree(OutputFormat::Json),
            tree(OutputFormat::Yaml),
        ]
    }

    fn stage_name(&self) -> &'static str {
        match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Tree => "tree",
        }
    }

    fn format_name(&self) -> &'static str {
        match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Print => "print",
            OutputFormat::Markup => "markup",
            OutputFormat::Treeviz => "treeviz",
        }
    }

    /// The format string this spec was parsed from
    pub fn name(&self) -> String {
        format!("{}-{}", self.stage_name(), self.format_name())
    }
}

/// Knobs that affect tree building and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    pub mode: ParseMode,
    pub indent: String,
    pub treeviz_label_width: usize,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::Lenient,
            indent: DEFAULT_INDENT.to_string(),
            treeviz_label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl From<&MarkupConfig> for ProcessOptions {
    fn from(config: &MarkupConfig) -> Self {
        Self {
            mode: config.parse.mode,
            indent: config.output.indent.clone(),
            treeviz_label_width: config.output.treeviz_label_width,
        }
    }
}

/// Errors that can occur during processing
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid stage: {0}")]
    InvalidStage(String),

    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),

    #[error("Malformed markup: {0}")]
    Malformed(#[from] MalformedMarkupError),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Tree is nested {depth} levels deep; {format} output supports at most {limit}")]
    TooDeep {
        format: &'static str,
        depth: usize,
        limit: usize,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Process markup text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    options: &ProcessOptions,
) -> Result<String, ProcessingError> {
    tracing::debug!(format = %spec.name(), mode = ?options.mode, "processing source");

    match spec.stage {
        ProcessingStage::Token => format_tokens(&tokenize(source), spec.format),
        ProcessingStage::Tree => {
            let root = parse_with_mode(source, options.mode)?;
            format_tree(&root, spec.format, options)
        }
    }
}

/// Process a markup file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &ProcessOptions,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|source| ProcessingError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    process_source(&content, spec, options)
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{:?} is not supported for the token stage",
            other
        ))),
    }
}

/// Format a tree according to the specified format
fn format_tree(
    root: &Node,
    format: OutputFormat,
    options: &ProcessOptions,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Print => Ok(to_print_str_with_indent(root, &options.indent)),
        OutputFormat::Markup => Ok(serialize_markup(root)),
        OutputFormat::Treeviz => Ok(to_treeviz_str(root, options.treeviz_label_width)),
        OutputFormat::Json => {
            check_serialized_depth(root, "json")?;
            serde_json::to_string_pretty(root)
                .map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        OutputFormat::Yaml => {
            check_serialized_depth(root, "yaml")?;
            serde_yaml::to_string(root).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
            "simple is not supported for the tree stage".to_string(),
        )),
    }
}

fn check_serialized_depth(root: &Node, format: &'static str) -> Result<(), ProcessingError> {
    let depth = root.depth();
    if depth > MAX_SERIALIZED_DEPTH {
        tracing::warn!(depth, limit = MAX_SERIALIZED_DEPTH, format, "tree too deep to serialize");
        return Err(ProcessingError::TooDeep {
            format,
            depth,
            limit: MAX_SERIALIZED_DEPTH,
        });
    }
    Ok(())
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}
