//! Output formatting for the JSON, YAML, and human-readable formats

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use synassist_ide::{render_markdown, CompletionItem, HoverDoc, Snippet};
use synassist_project::ValidationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

/// Project facts as reported by `synassist info`.
#[derive(Debug, Serialize)]
pub struct ProjectInfo {
    pub workspace: String,
    pub is_synapse_project: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synapse_version: Option<String>,
    /// Sorted for stable output across runs.
    pub dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    workspace: String,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_report(&self, workspace: &Path, report: &ValidationReport) -> Result<String> {
        let output = CheckOutput {
            workspace: workspace.display().to_string(),
            report,
        };
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&output).context("Failed to serialize report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(&output).context("Failed to serialize report to YAML")
            }
            OutputFormat::Human => Ok(human_report(workspace, report)),
        }
    }

    pub fn format_info(&self, info: &ProjectInfo) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(info).context("Failed to serialize info to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(info).context("Failed to serialize info to YAML")
            }
            OutputFormat::Human => Ok(human_info(info)),
        }
    }

    pub fn format_hover(&self, doc: &HoverDoc) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(doc).context("Failed to serialize hover doc to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(doc).context("Failed to serialize hover doc to YAML")
            }
            OutputFormat::Human => Ok(render_markdown(doc)),
        }
    }

    pub fn format_completions(&self, items: &[CompletionItem]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(items)
                .context("Failed to serialize completions to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(items).context("Failed to serialize completions to YAML")
            }
            OutputFormat::Human => Ok(human_completions(items)),
        }
    }

    pub fn format_snippets(&self, snippets: &[Snippet]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(snippets).context("Failed to serialize snippets to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(snippets).context("Failed to serialize snippets to YAML")
            }
            OutputFormat::Human => Ok(human_snippets(snippets)),
        }
    }
}

fn human_report(workspace: &Path, report: &ValidationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Workspace: {}\n", workspace.display()));
    out.push_str(&format!(
        "Status: {}\n",
        if report.is_valid { "valid" } else { "invalid" }
    ));

    if !report.errors.is_empty() {
        out.push_str("\nErrors:\n");
        for error in &report.errors {
            out.push_str(&format!("  - {}\n", error));
        }
    }

    if !report.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for warning in &report.warnings {
            out.push_str(&format!("  - {}\n", warning));
        }
    }

    out
}

fn human_info(info: &ProjectInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("Workspace: {}\n", info.workspace));
    out.push_str(&format!(
        "Synapse project: {}\n",
        if info.is_synapse_project { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "Core version: {}\n",
        info.synapse_version.as_deref().unwrap_or("not declared")
    ));

    if !info.dependencies.is_empty() {
        out.push_str("\nSynapse dependencies:\n");
        for (name, range) in &info.dependencies {
            out.push_str(&format!("  {} = {}\n", name, range));
        }
    }

    out
}

fn human_completions(items: &[CompletionItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{:<12} ({:?}) {}\n",
            item.label, item.kind, item.detail
        ));
    }
    out
}

fn human_snippets(snippets: &[Snippet]) -> String {
    let mut out = String::new();
    for snippet in snippets {
        out.push_str(&format!(
            "{:<18} [{}] {}\n",
            snippet.prefix, snippet.category, snippet.description
        ));
    }
    out
}
