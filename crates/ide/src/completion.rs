//! Completion catalog for Synapse framework APIs

use regex::Regex;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Class,
    Method,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    /// Text inserted on accept; may carry `${n:placeholder}` tab stops.
    pub insert_text: String,
    pub detail: String,
}

impl CompletionItem {
    fn new(label: &str, kind: CompletionKind, insert_text: &str, detail: &str) -> Self {
        Self {
            label: label.to_string(),
            kind,
            insert_text: insert_text.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Authoring position the completion request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionContext {
    Import,
    NeuronBody,
    CircuitBody,
    General,
}

/// The full Synapse completion catalog.
pub fn completion_items() -> Vec<CompletionItem> {
    vec![
        CompletionItem::new(
            "Neuron",
            CompletionKind::Class,
            "Neuron",
            "Base class for creating neurons - individual processing units in Synapse",
        ),
        CompletionItem::new(
            "Circuit",
            CompletionKind::Class,
            "Circuit",
            "Container for composing multiple neurons into a processing pipeline",
        ),
        CompletionItem::new(
            "process",
            CompletionKind::Method,
            "async process(input: any): Promise<any> {\n  $0\n}",
            "Main processing method for transforming input data",
        ),
        CompletionItem::new(
            "initialize",
            CompletionKind::Method,
            "async initialize(): Promise<void> {\n  await super.initialize();\n  $0\n}",
            "Called when neuron is initialized - setup resources here",
        ),
        CompletionItem::new(
            "cleanup",
            CompletionKind::Method,
            "async cleanup(): Promise<void> {\n  $0\n  await super.cleanup();\n}",
            "Called when neuron is destroyed - cleanup resources here",
        ),
        CompletionItem::new(
            "on",
            CompletionKind::Method,
            "on('${1:event}', (data: ${2:any}) => {\n  $0\n})",
            "Register an event listener",
        ),
        CompletionItem::new(
            "emit",
            CompletionKind::Method,
            "emit('${1:event}', ${2:data})",
            "Emit an event to all registered listeners",
        ),
        CompletionItem::new(
            "off",
            CompletionKind::Method,
            "off('${1:event}', ${2:handler})",
            "Remove an event listener",
        ),
        CompletionItem::new(
            "addNeuron",
            CompletionKind::Method,
            "addNeuron(${1:neuron})",
            "Add a neuron to the circuit",
        ),
        CompletionItem::new(
            "execute",
            CompletionKind::Method,
            "async execute(input: any): Promise<any> {\n  $0\n}",
            "Execute the circuit with input data",
        ),
    ]
}

/// Decide which slice of the catalog applies at the cursor.
///
/// A Neuron subclass wins over a Circuit one when a document defines both.
pub fn detect_context(document: &str, line_prefix: &str) -> CompletionContext {
    let context = if line_prefix.contains("import") {
        CompletionContext::Import
    } else if extends_class(document, "Neuron") {
        CompletionContext::NeuronBody
    } else if extends_class(document, "Circuit") {
        CompletionContext::CircuitBody
    } else {
        CompletionContext::General
    };

    debug!(?context, "resolved completion context");
    context
}

fn extends_class(document: &str, class: &str) -> bool {
    Regex::new(&format!(r"extends\s+{class}\b"))
        .map(|re| re.is_match(document))
        .unwrap_or(false)
}

/// Completion items for one authoring context.
pub fn completions_for(context: CompletionContext) -> Vec<CompletionItem> {
    match context {
        CompletionContext::Import => import_completions(),
        CompletionContext::NeuronBody => {
            filter_catalog(&["process", "initialize", "cleanup", "on", "emit", "off"])
        }
        CompletionContext::CircuitBody => {
            filter_catalog(&["addNeuron", "execute", "process", "on", "emit", "off"])
        }
        CompletionContext::General => completion_items(),
    }
}

fn import_completions() -> Vec<CompletionItem> {
    vec![
        CompletionItem::new(
            "Neuron",
            CompletionKind::Class,
            "Neuron",
            "Import Neuron class from @synapse/core",
        ),
        CompletionItem::new(
            "Circuit",
            CompletionKind::Class,
            "Circuit",
            "Import Circuit class from @synapse/core",
        ),
    ]
}

fn filter_catalog(labels: &[&str]) -> Vec<CompletionItem> {
    completion_items()
        .into_iter()
        .filter(|item| labels.contains(&item.label.as_str()))
        .collect()
}
