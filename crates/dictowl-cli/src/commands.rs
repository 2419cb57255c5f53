//! CLI command definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dictowl_core::AxiomKind;
use dictowl_gen::{AxiomGenerator, DataDictionaryRecord, GeneratorConfig, IdentifierKind, IdentifierResolver};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "dictowl")]
#[command(about = "Generate OWL axioms from data dictionaries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the axiom set for a data dictionary
    Generate {
        /// Data dictionary as a JSON array of records
        #[arg(short, long)]
        dictionary: PathBuf,

        /// Term metadata tables (CSV, optionally gzip compressed), loaded in order
        #[arg(short, long)]
        terms: Vec<PathBuf>,

        /// Generator configuration as JSON
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Resolve term identifiers to canonical IRIs
    Resolve {
        /// Identifiers such as NCIT:C100 or HP:0000118
        #[arg(required = true)]
        identifiers: Vec<String>,

        /// Generator configuration as JSON
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the namespaces in effect
    Info {
        /// Generator configuration as JSON
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Output format options
#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    JsonPretty,
}

/// Command execution result
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct GenerateSummary {
    records: usize,
    terms: usize,
    axioms: usize,
    by_kind: BTreeMap<AxiomKind, usize>,
}

/// Execute CLI commands
#[derive(Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Execute a CLI command
    pub fn execute(&mut self, command: Commands) -> Result<CommandResult> {
        match command {
            Commands::Generate {
                dictionary,
                terms,
                config,
                output,
                format,
            } => self.execute_generate(dictionary, terms, config, output, format),
            Commands::Resolve { identifiers, config } => self.execute_resolve(identifiers, config),
            Commands::Info { config } => self.execute_info(config),
        }
    }

    fn execute_generate(
        &self,
        dictionary: PathBuf,
        terms: Vec<PathBuf>,
        config: Option<PathBuf>,
        output: Option<PathBuf>,
        format: OutputFormat,
    ) -> Result<CommandResult> {
        let config = load_config(config.as_deref())?;

        let content = std::fs::read_to_string(&dictionary)
            .with_context(|| format!("Failed to read dictionary {}", dictionary.display()))?;
        let records: Vec<DataDictionaryRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid dictionary {}", dictionary.display()))?;

        let mut builder = IdentifierResolver::new(&config).store_builder();
        for path in &terms {
            let rows = builder.load_path(path)?;
            info!("Loaded {} term rows from {}", rows, path.display());
        }
        let store = builder.build();

        let generator = AxiomGenerator::new(config, &store)?;
        let axioms = generator.generate(&records)?;

        let summary = GenerateSummary {
            records: records.len(),
            terms: store.len(),
            axioms: axioms.len(),
            by_kind: axioms.count_by_kind(),
        };

        let result = match format {
            OutputFormat::Text => format_summary(&summary),
            OutputFormat::Json => serde_json::to_string(&axioms)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&axioms)?,
        };

        if let Some(output_path) = output {
            std::fs::write(&output_path, &result)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        } else {
            println!("{}", result);
        }

        Ok(CommandResult {
            success: true,
            message: format!("Generated {} axioms from {} records", summary.axioms, summary.records),
            data: Some(serde_json::to_value(&summary)?),
        })
    }

    fn execute_resolve(&self, identifiers: Vec<String>, config: Option<PathBuf>) -> Result<CommandResult> {
        let config = load_config(config.as_deref())?;
        let resolver = IdentifierResolver::new(&config);

        let mut resolved = serde_json::Map::new();
        for identifier in &identifiers {
            let iri = resolver.resolve_str(identifier);
            let marker = match IdentifierKind::classify(identifier) {
                IdentifierKind::Unrecognized => " (unresolved)",
                _ => "",
            };
            println!("{}\t{}{}", identifier, iri, marker);
            resolved.insert(identifier.clone(), serde_json::Value::String(iri.to_string()));
        }

        Ok(CommandResult {
            success: true,
            message: format!("Resolved {} identifiers", identifiers.len()),
            data: Some(serde_json::Value::Object(resolved)),
        })
    }

    fn execute_info(&self, config: Option<PathBuf>) -> Result<CommandResult> {
        let config = load_config(config.as_deref())?;

        println!("dictowl v{}", env!("CARGO_PKG_VERSION"));
        println!("Namespace: {}", config.namespace);
        println!("NCIT base: {}", config.ncit_base);
        println!("OBO base:  {}", config.obo_base);

        Ok(CommandResult {
            success: true,
            message: "System information".to_string(),
            data: Some(serde_json::json!({
                "name": "dictowl",
                "version": env!("CARGO_PKG_VERSION"),
                "config": config,
            })),
        })
    }
}

/// Read a generator configuration, falling back to the defaults
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            GeneratorConfig::from_json_str(&json)
                .with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Ok(GeneratorConfig::default()),
    }
}

fn format_summary(summary: &GenerateSummary) -> String {
    let mut output = format!(
        "Records: {}\nTerms:   {}\nAxioms:  {}\n",
        summary.records, summary.terms, summary.axioms
    );
    for (kind, count) in &summary.by_kind {
        output.push_str(&format!("  {}: {}\n", kind, count));
    }
    output
}
