//! Hover documentation for Synapse framework symbols

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    pub type_name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HoverDoc {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'static str>,
}

/// Documentation for a hovered word, or `None` for symbols outside the
/// Synapse API surface.
pub fn hover_doc(word: &str) -> Option<HoverDoc> {
    match word {
        "Neuron" => Some(HoverDoc {
            title: "Neuron",
            description: "Base class for creating neurons - individual processing units in the Synapse Framework. Neurons are the fundamental building blocks that process data asynchronously.",
            signature: Some("class Neuron"),
            example: Some(
                "import { Neuron } from '@synapse/core';\n\nclass MyNeuron extends Neuron {\n  async process(input: any): Promise<any> {\n    // Transform input data\n    return processedData;\n  }\n}",
            ),
            ..Default::default()
        }),
        "Circuit" => Some(HoverDoc {
            title: "Circuit",
            description: "Container class for composing multiple neurons into a processing pipeline. Circuits orchestrate complex workflows by connecting neurons together.",
            signature: Some("class Circuit"),
            example: Some(
                "import { Circuit } from '@synapse/core';\n\nclass MyCircuit extends Circuit {\n  constructor() {\n    super();\n    this.addNeuron(new ProcessingNeuron());\n    this.addNeuron(new ValidationNeuron());\n  }\n}",
            ),
            ..Default::default()
        }),
        "process" => Some(HoverDoc {
            title: "process",
            description: "Main processing method for transforming input data. This async method is called to handle data processing in neurons.",
            signature: Some("async process(input: any): Promise<any>"),
            params: vec![ParamDoc {
                name: "input",
                type_name: "any",
                description: "Input data to be processed by the neuron",
            }],
            returns: Some("Promise<any> - Processed output data"),
            notes: vec![
                "Override this method to implement custom processing logic",
                "Always return a Promise for async processing",
                "Handle errors appropriately within this method",
            ],
            ..Default::default()
        }),
        "initialize" => Some(HoverDoc {
            title: "initialize",
            description: "Lifecycle method called when neuron is initialized. Use this to set up resources, connections, or initial state.",
            signature: Some("async initialize(): Promise<void>"),
            returns: Some("Promise<void>"),
            notes: vec![
                "Call super.initialize() first when overriding",
                "Initialize database connections, file handles, etc.",
                "Runs only once during neuron creation",
            ],
            see_also: vec!["cleanup", "process"],
            ..Default::default()
        }),
        "cleanup" => Some(HoverDoc {
            title: "cleanup",
            description: "Lifecycle method called when neuron is destroyed. Use this to release resources, close connections, or perform cleanup.",
            signature: Some("async cleanup(): Promise<void>"),
            returns: Some("Promise<void>"),
            notes: vec![
                "Call super.cleanup() last when overriding",
                "Close database connections, file handles, etc.",
                "Runs when neuron is being destroyed or removed",
            ],
            see_also: vec!["initialize"],
            ..Default::default()
        }),
        "on" => Some(HoverDoc {
            title: "on",
            description: "Register an event listener. Allows neurons to respond to events emitted by other neurons or circuits.",
            signature: Some("on(event: string, handler: (data: any) => void): void"),
            ..Default::default()
        }),
        "emit" => Some(HoverDoc {
            title: "emit",
            description: "Emit an event to all registered listeners. Used for inter-neuron communication and event-driven workflows.",
            signature: Some("emit(event: string, data?: any): void"),
            ..Default::default()
        }),
        "addNeuron" => Some(HoverDoc {
            title: "addNeuron",
            description: "Add a neuron to the circuit. Neurons are executed in the order they are added.",
            signature: Some("addNeuron(neuron: Neuron): void"),
            ..Default::default()
        }),
        "execute" => Some(HoverDoc {
            title: "execute",
            description: "Execute the circuit with input data. Processes data through all neurons in the circuit.",
            signature: Some("async execute(input: any): Promise<any>"),
            ..Default::default()
        }),
        _ => None,
    }
}

/// Render a hover document as markdown for display surfaces.
pub fn render_markdown(doc: &HoverDoc) -> String {
    let mut out = String::new();

    out.push_str(&format!("### {}\n\n", doc.title));

    if let Some(signature) = doc.signature {
        out.push_str(&format!("**Signature:** `{}`\n\n", signature));
    }

    out.push_str(&format!("{}\n\n", doc.description));

    if !doc.params.is_empty() {
        out.push_str("**Parameters:**\n");
        for param in &doc.params {
            out.push_str(&format!(
                "- `{}` ({}): {}\n",
                param.name, param.type_name, param.description
            ));
        }
        out.push('\n');
    }

    if let Some(returns) = doc.returns {
        out.push_str(&format!("**Returns:** {}\n\n", returns));
    }

    if !doc.notes.is_empty() {
        out.push_str("**Notes:**\n");
        for note in &doc.notes {
            out.push_str(&format!("- {}\n", note));
        }
        out.push('\n');
    }

    if !doc.see_also.is_empty() {
        out.push_str(&format!("**See also:** {}\n\n", doc.see_also.join(", ")));
    }

    if let Some(example) = doc.example {
        out.push_str(&format!("**Example:**\n```typescript\n{}\n```\n", example));
    }

    out
}
