pub mod completion;
pub mod hover;
pub mod snippets;

pub use completion::{
    completion_items, completions_for, detect_context, CompletionContext, CompletionItem,
    CompletionKind,
};
pub use hover::{hover_doc, render_markdown, HoverDoc, ParamDoc};
pub use snippets::{snippets_in_category, synapse_snippets, Snippet};
