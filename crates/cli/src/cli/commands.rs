use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Authoring assistance for the Synapse framework
#[derive(Parser, Debug)]
#[command(
    name = "synassist",
    about = "Authoring assistance for the Synapse framework",
    version,
    long_about = "synassist detects Synapse projects from their package.json manifests, \
                  validates workspace structure against framework conventions, and serves \
                  the completion, hover, and snippet catalogs used by editor integrations."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Validate a workspace against Synapse project conventions",
        long_about = "Checks that the workspace declares @synapse/* dependencies and follows \
                      the expected layout (src/, tsconfig.json, convention directories).\n\n\
                      Examples:\n  \
                      synassist check\n  \
                      synassist check /path/to/workspace\n  \
                      synassist check --format json\n  \
                      synassist check --watch"
    )]
    Check(CheckArgs),

    #[command(
        about = "Show detected Synapse project facts for a workspace",
        long_about = "Reports whether the workspace is a Synapse project, the declared \
                      @synapse/core version, and every @synapse/* dependency.\n\n\
                      Examples:\n  \
                      synassist info\n  \
                      synassist info /path/to/workspace --format json"
    )]
    Info(InfoArgs),

    #[command(
        about = "Show documentation for a Synapse API symbol",
        long_about = "Examples:\n  \
                      synassist hover Neuron\n  \
                      synassist hover process --format json"
    )]
    Hover(HoverArgs),

    #[command(
        about = "List completion items for an authoring context",
        long_about = "Derives the completion context from the document and cursor line, the \
                      way an editor integration would.\n\n\
                      Examples:\n  \
                      synassist complete\n  \
                      synassist complete --line-prefix 'import { '\n  \
                      synassist complete --file src/MyNeuron.ts"
    )]
    Complete(CompleteArgs),

    #[command(
        about = "List the Synapse snippet catalog",
        long_about = "Examples:\n  \
                      synassist snippets\n  \
                      synassist snippets --category messaging --format json"
    )]
    Snippets(SnippetsArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the workspace (defaults to current directory)"
    )]
    pub workspace: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        help = "Keep running and re-validate whenever the workspace manifest changes"
    )]
    pub watch: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the workspace (defaults to current directory)"
    )]
    pub workspace: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct HoverArgs {
    #[arg(value_name = "SYMBOL", help = "Synapse API symbol, e.g. Neuron or process")]
    pub symbol: String,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    #[arg(
        long,
        value_name = "TEXT",
        help = "Text on the cursor line up to the cursor"
    )]
    pub line_prefix: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Document being edited (used for class-context detection)"
    )]
    pub file: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct SnippetsArgs {
    #[arg(
        short = 'c',
        long,
        value_name = "CATEGORY",
        help = "Only list snippets in this category (core, messaging, testing, types)"
    )]
    pub category: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
