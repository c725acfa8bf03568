use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;
use timeline_events::{
    latest_events_file, read_events, write_events, EventExtractor, EVENTS_FILE_PREFIX,
};
use timeline_graph::{assemble_timeline, generate_causal_timeline, TimelineEntry};
use timeline_vector_store::HashEmbedding;

#[derive(Parser)]
#[command(name = "causal-timeline")]
#[command(about = "Causal timeline generation for news topics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and compress a causal timeline from processed events
    Generate(GenerateArgs),

    /// Extract structured causal events from cleaned article text
    Extract(ExtractArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Processed causal-events JSONL file (overrides --data-dir discovery)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory holding causal_events_*.jsonl files
    #[arg(long, default_value = "data/processed")]
    data_dir: PathBuf,

    /// Maximum number of timeline events to keep
    #[arg(long, default_value_t = 10)]
    top_k: usize,

    /// Emit the timeline as a JSON array on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ExtractArgs {
    /// JSONL of cleaned article documents ({"text", "date", "source_url"})
    #[arg(long)]
    input: PathBuf,

    /// Search topic, used for fallback causal agents
    #[arg(long)]
    topic: String,

    /// Output path; defaults to data/processed/causal_events_<input-stem>.jsonl
    #[arg(long)]
    output: Option<PathBuf>,
}

/// One cleaned article document, as produced by the upstream crawler and
/// HTML-stripping stages.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    text: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    source_url: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Extract(args) => run_extract(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let input = match args.input {
        Some(path) => path,
        None => latest_events_file(&args.data_dir)
            .with_context(|| format!("failed to scan {:?}", args.data_dir))?
            .with_context(|| {
                format!(
                    "no {EVENTS_FILE_PREFIX}*.jsonl files under {:?}; run `extract` first",
                    args.data_dir
                )
            })?,
    };
    log::info!("Using processed events from {input:?}");

    let events = read_events(&input).with_context(|| format!("failed to read {input:?}"))?;
    if events.is_empty() {
        // Nothing found is a valid outcome, not a failure.
        if args.json {
            println!("[]");
        } else {
            println!("No structured events found.");
        }
        return Ok(());
    }

    let provider = HashEmbedding::default();
    let timeline = generate_causal_timeline(&events, args.top_k, &provider)
        .context("timeline generation failed")?;
    let entries = assemble_timeline(&timeline);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        render_console(&entries);
    }
    Ok(())
}

fn render_console(entries: &[TimelineEntry]) {
    for entry in entries {
        let date = entry.date.as_deref().unwrap_or("unknown date");
        println!("[{date}] {}", entry.summary);
        if let Some(agent) = &entry.causal_agent {
            println!("    caused by: {agent}");
        }
        if let Some(url) = &entry.url {
            println!("    source: {url}");
        }
        println!();
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {:?}", args.input))?;

    let extractor = EventExtractor::new(&args.topic)?;
    let mut events = Vec::new();
    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let doc: RawDocument = match serde_json::from_str(line) {
            Ok(doc) => doc,
            Err(err) => {
                log::warn!("Skipping malformed document line: {err}");
                continue;
            }
        };
        if doc.text.trim().is_empty() {
            continue;
        }

        let mut event = extractor.extract(&doc.text);
        event = extractor.anchor_dates(event, doc.date.as_deref());
        event.source_url = doc.source_url;
        if event.has_summary() {
            events.push(event);
        }
    }

    if events.is_empty() {
        bail!("no causal events extracted from {:?}", args.input);
    }

    let output = match args.output {
        Some(path) => path,
        None => {
            let stem = args
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("input");
            PathBuf::from("data/processed").join(format!("{EVENTS_FILE_PREFIX}{stem}.jsonl"))
        }
    };
    write_events(&output, &events)?;

    println!("Processed {} causal events -> {}", events.len(), output.display());
    Ok(())
}
