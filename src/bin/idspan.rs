use clap::Parser;
use idspan::{annotate_source, AnnotateError, AnnotateResponse, AnnotatorConfig, Language, Workspace};
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const STDIN_PATH: &str = "-";

/// One `--json` output line: the response tagged with the file it answers.
#[derive(Serialize)]
struct FileResponse<'a> {
    file: &'a str,
    #[serde(flatten)]
    response: &'a AnnotateResponse,
}

fn to_json_line(file: &str, response: &AnnotateResponse) -> Result<String, AnnotateError> {
    serde_json::to_string(&FileResponse { file, response })
        .map_err(|e| AnnotateError::internal(format!("Failed to encode response: {}", e)))
}

#[derive(Parser)]
#[command(author, version, about = "Annotate source files with identifier column ranges", long_about = None)]
struct Cli {
    /// Files to annotate, relative to the base path. `-` reads standard input.
    #[arg(required = true)]
    files: Vec<String>,

    /// Path to config file
    #[arg(short, long, default_value = "idspan.json")]
    config: PathBuf,

    /// Project base path (overrides the config file)
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// Identifier grammar (generic, java, rust); detected from the extension when omitted
    #[arg(short, long)]
    language: Option<Language>,

    /// Print one JSON response per file instead of the annotated text
    #[arg(long)]
    json: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<AnnotatorConfig, AnnotateError> {
    let mut config = if cli.config.exists() {
        AnnotatorConfig::from_file(&cli.config)?
    } else {
        // Default config
        AnnotatorConfig::default()
    };
    if let Some(base) = &cli.base {
        config.base_path = base.clone();
    }
    if cli.language.is_some() {
        config.language = cli.language;
    }
    Ok(config)
}

fn read_stdin(language: Option<Language>) -> AnnotateResponse {
    let mut source = String::new();
    match io::stdin().read_to_string(&mut source) {
        Ok(_) => AnnotateResponse::success(annotate_source(&source, language.unwrap_or_default())),
        Err(e) => AnnotateResponse::failure(&AnnotateError::Read {
            path: STDIN_PATH.to_string(),
            source: e,
        }),
    }
}

fn print_response(file: &str, response: &AnnotateResponse, json: bool) -> Result<(), AnnotateError> {
    if json {
        println!("{}", to_json_line(file, response)?);
        return Ok(());
    }
    match (&response.status, &response.error) {
        (Some(rendered), _) => println!("{}", rendered),
        (None, Some(error)) => eprintln!("{}: {}", file, error),
        (None, None) => {}
    }
    Ok(())
}

async fn run(cli: &Cli) -> Result<bool, AnnotateError> {
    let config = load_config(cli)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    let workspace = Workspace::new(config);
    let (stdin, files): (Vec<String>, Vec<String>) =
        cli.files.iter().cloned().partition(|file| file == STDIN_PATH);

    let mut results = Vec::new();
    if !stdin.is_empty() {
        results.push((STDIN_PATH.to_string(), read_stdin(workspace.config().language)));
    }
    results.extend(workspace.annotate_files(&files).await);

    let mut all_ok = true;
    for (file, response) in &results {
        all_ok &= response.is_success();
        print_response(file, response, cli.json)?;
    }
    Ok(all_ok)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
