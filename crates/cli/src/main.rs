use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::mpsc;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, error, info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use synassist_cli::cli::commands::{
    CheckArgs, CliArgs, Commands, CompleteArgs, HoverArgs, InfoArgs, SnippetsArgs,
};
use synassist_cli::cli::output::{OutputFormatter, ProjectInfo};
use synassist_cli::{NAME, VERSION};
use synassist_core::{RealFileSystem, SynassistConfig};
use synassist_ide::{completions_for, detect_context, hover_doc, snippets_in_category, synapse_snippets};
use synassist_project::ProjectDetector;

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Check(check_args) => handle_check(check_args, args.quiet),
        Commands::Info(info_args) => handle_info(info_args),
        Commands::Hover(hover_args) => handle_hover(hover_args),
        Commands::Complete(complete_args) => handle_complete(complete_args),
        Commands::Snippets(snippets_args) => handle_snippets(snippets_args),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = if let Some(level_str) = &args.log_level {
            parse_level(level_str)
        } else if args.verbose {
            Level::DEBUG
        } else if args.quiet {
            Level::ERROR
        } else {
            let level_str =
                env::var("SYNASSIST_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter
                .add_directive(format!("synassist={}", level).parse().unwrap())
                .add_directive(format!("synassist_core={}", level).parse().unwrap())
                .add_directive(format!("synassist_project={}", level).parse().unwrap())
                .add_directive(format!("synassist_ide={}", level).parse().unwrap())
                .add_directive("notify=warn".parse().unwrap());
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn resolve_workspace(arg: Option<&PathBuf>) -> Option<PathBuf> {
    let path = arg
        .cloned()
        .unwrap_or_else(|| env::current_dir().expect("Failed to get current directory"));

    debug!("Workspace path: {}", path.display());

    if !path.exists() {
        error!("Workspace path does not exist: {}", path.display());
        return None;
    }

    if !path.is_dir() {
        error!("Workspace path is not a directory: {}", path.display());
        return None;
    }

    match path.canonicalize() {
        Ok(path) => Some(path),
        Err(e) => {
            error!("Failed to canonicalize workspace path: {}", e);
            None
        }
    }
}

fn build_detector() -> Option<ProjectDetector> {
    let config = SynassistConfig::default();
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("\nPlease check your SYNASSIST_* environment variables.");
        return None;
    }

    Some(ProjectDetector::with_ttl(
        Arc::new(RealFileSystem::new()),
        config.cache_ttl(),
    ))
}

fn handle_check(args: &CheckArgs, quiet: bool) -> i32 {
    let Some(workspace) = resolve_workspace(args.workspace.as_ref()) else {
        return 1;
    };
    let Some(detector) = build_detector() else {
        return 1;
    };
    let formatter = OutputFormatter::new(args.format.into());

    if args.watch {
        let mut detector = detector;
        let (tx, rx) = mpsc::channel();
        if let Err(e) = detector.watch_manifests_with_events(&workspace, tx) {
            error!("Failed to watch workspace: {}", e);
            return 1;
        }

        if print_report(&formatter, &detector, &workspace).is_err() {
            return 1;
        }
        if !quiet {
            info!("Watching {} for manifest changes", workspace.display());
        }

        for changed in rx {
            if changed != workspace {
                continue;
            }
            debug!("Manifest changed, re-validating");
            if print_report(&formatter, &detector, &workspace).is_err() {
                return 1;
            }
        }

        0
    } else {
        let report = detector.validate_structure(&workspace);
        match formatter.format_report(&workspace, &report) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                error!("Failed to format output: {}", e);
                return 1;
            }
        }

        if report.is_valid {
            0
        } else {
            1
        }
    }
}

fn print_report(
    formatter: &OutputFormatter,
    detector: &ProjectDetector,
    workspace: &std::path::Path,
) -> Result<(), ()> {
    let report = detector.validate_structure(workspace);
    match formatter.format_report(workspace, &report) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Failed to format output: {}", e);
            Err(())
        }
    }
}

fn handle_info(args: &InfoArgs) -> i32 {
    let Some(workspace) = resolve_workspace(args.workspace.as_ref()) else {
        return 1;
    };
    let Some(detector) = build_detector() else {
        return 1;
    };

    let info = ProjectInfo {
        workspace: workspace.display().to_string(),
        is_synapse_project: detector.is_synapse_project(&workspace),
        synapse_version: detector.synapse_version(&workspace),
        dependencies: detector
            .all_synapse_dependencies(&workspace)
            .into_iter()
            .collect::<BTreeMap<_, _>>(),
    };

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_info(&info) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format output: {}", e);
            1
        }
    }
}

fn handle_hover(args: &HoverArgs) -> i32 {
    let Some(doc) = hover_doc(&args.symbol) else {
        error!("No Synapse documentation for '{}'", args.symbol);
        return 1;
    };

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_hover(&doc) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format output: {}", e);
            1
        }
    }
}

fn handle_complete(args: &CompleteArgs) -> i32 {
    let document = match &args.file {
        Some(file) => match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                error!("Failed to read document {}: {}", file.display(), e);
                return 1;
            }
        },
        None => String::new(),
    };
    let line_prefix = args.line_prefix.as_deref().unwrap_or("");

    let context = detect_context(&document, line_prefix);
    let items = completions_for(context);

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_completions(&items) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format output: {}", e);
            1
        }
    }
}

fn handle_snippets(args: &SnippetsArgs) -> i32 {
    let snippets = match &args.category {
        Some(category) => snippets_in_category(category),
        None => synapse_snippets(),
    };

    if snippets.is_empty() {
        if let Some(category) = &args.category {
            error!("No snippets in category '{}'", category);
            return 1;
        }
    }

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_snippets(&snippets) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format output: {}", e);
            1
        }
    }
}
