//! Notte Snippet CLI
//!
//! Usage:
//!   notte-snippet [OPTIONS]
//!
//! Options:
//!   --fields <FILE>          Form values (TOML format)
//!   --api-key <KEY>          API key [env: NOTTE_API_KEY]
//!   --task <TEXT>            Task for the agent
//!   --model <ID>             Model id
//!   --vault-id <ID>          Vault id
//!   --session-id <ID>        Session id
//!   -s, --stylesheet <FILE>  Stylesheet for classes and colors (TOML format)
//!   -f, --format <FORMAT>    plain, inline, html or page
//!   --no-line-numbers        Omit line numbers from listings
//!   --models                 List the models offered by the builder
//!   -v, --verbose            Increase log verbosity
//!   -h, --help               Print help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use notte_snippet::composer::MODELS;
use notte_snippet::{
    render_with_config, FieldsOverlay, FormFields, HtmlConfig, OutputFormat, RenderConfig,
    Stylesheet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// The composed Python code
    Plain,
    /// Annotated spans without the listing wrapper
    Inline,
    /// Line-numbered HTML listing
    Html,
    /// Standalone HTML page
    Page,
}

#[derive(Parser)]
#[command(name = "notte-snippet")]
#[command(about = "Generate Notte SDK example code for an agent task")]
struct Cli {
    /// Form values file (TOML format)
    #[arg(long)]
    fields: Option<PathBuf>,

    /// API key placed in the client constructor
    #[arg(long, env = "NOTTE_API_KEY")]
    api_key: Option<String>,

    /// Task for the agent to run
    #[arg(long)]
    task: Option<String>,

    /// Model id (an empty value omits the argument)
    #[arg(long)]
    model: Option<String>,

    /// Vault id
    #[arg(long)]
    vault_id: Option<String>,

    /// Session id
    #[arg(long)]
    session_id: Option<String>,

    /// Stylesheet file for classes and colors (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Html)]
    format: FormatArg,

    /// Omit line numbers from listings
    #[arg(long)]
    no_line_numbers: bool,

    /// List the models offered by the builder
    #[arg(long)]
    models: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "notte_snippet=warn",
        1 => "notte_snippet=debug",
        _ => "notte_snippet=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.models {
        print_models();
        return;
    }

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let fields = match resolve_fields(&cli) {
        Ok(fields) => fields,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };
    debug!(?fields, "resolved form fields");

    let format = match cli.format {
        FormatArg::Plain => OutputFormat::Plain,
        FormatArg::Inline => OutputFormat::Inline,
        FormatArg::Html | FormatArg::Page => OutputFormat::Html,
    };
    let config = RenderConfig::new()
        .with_format(format)
        .with_stylesheet(stylesheet)
        .with_html(
            HtmlConfig::new()
                .with_line_numbers(!cli.no_line_numbers)
                .with_standalone(cli.format == FormatArg::Page),
        );

    println!("{}", render_with_config(&fields, &config));
}

/// Layer the builder's initial state, the fields file and the flags
///
/// A flag given with an empty value still overrides, so `--task ""`
/// produces `task=""`.
fn resolve_fields(cli: &Cli) -> Result<FormFields, String> {
    let mut fields = FormFields::initial();

    if let Some(path) = &cli.fields {
        let from_file = FieldsOverlay::from_file(path).map_err(|e| e.report())?;
        fields = fields.overlay(from_file);
    }

    let flags = FieldsOverlay {
        api_key: cli.api_key.clone(),
        task: cli.task.clone(),
        model: cli.model.clone(),
        vault_id: cli.vault_id.clone(),
        session_id: cli.session_id.clone(),
    };

    Ok(fields.overlay(flags))
}

fn print_models() {
    println!("MODELS");
    println!("------");
    for model in MODELS {
        println!("{:<16} {}", model.id, model.name);
    }
}
