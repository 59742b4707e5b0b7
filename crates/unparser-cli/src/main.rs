use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unparser_core::{render_with, BeginPolicy, Document, Registry, UnparserConfig};

/// Render a JSON-encoded Ruby AST back into Ruby source.
#[derive(Parser, Debug)]
#[command(name = "unparse", version, about)]
struct Cli {
    /// AST document to read; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render nodes of this type verbatim from their source range (repeatable)
    #[arg(long = "verbatim", value_name = "TAG")]
    verbatim: Vec<String>,

    /// How to treat `begin` nodes that do not have exactly one child
    #[arg(long, value_enum)]
    begin_policy: Option<BeginPolicyArg>,

    /// Fail on node types without an emitter instead of copying their source
    #[arg(long)]
    no_source_fallback: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BeginPolicyArg {
    Strict,
    FirstChild,
}

impl From<BeginPolicyArg> for BeginPolicy {
    fn from(arg: BeginPolicyArg) -> Self {
        match arg {
            BeginPolicyArg::Strict => BeginPolicy::Strict,
            BeginPolicyArg::FirstChild => BeginPolicy::FirstChild,
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<UnparserConfig> {
    let mut config = match &cli.config {
        Some(path) => UnparserConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => UnparserConfig::default(),
    };
    if let Some(policy) = cli.begin_policy {
        config.begin_policy = policy.into();
    }
    if cli.no_source_fallback {
        config.source_fallback = false;
    }
    config.verbatim_tags.extend(cli.verbatim.iter().cloned());
    debug!(?config, "resolved config");
    Ok(config)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let registry = Registry::for_config(&config);

    let input = read_input(cli.input.as_ref())?;
    let document = Document::from_json(&input).context("Failed to load AST document")?;
    info!(root = %document.root.tag, "rendering");

    let source =
        render_with(&document.root, &registry, &config).context("Failed to render AST")?;
    println!("{source}");
    Ok(())
}
