pub mod commands;
pub mod output;

pub use commands::{
    CheckArgs, CliArgs, Commands, CompleteArgs, HoverArgs, InfoArgs, SnippetsArgs,
};
pub use output::{OutputFormat, OutputFormatter, ProjectInfo};
