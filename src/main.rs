use std::fs;
use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use mindmap::{CompilerConfig, ConfigError, GraphError, MindmapGraph};
use tracing::level_filters::LevelFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Parser, Debug)]
#[command(name = "mindmap", about = "Mindmap outline compiler: outline text <-> positioned JSON graph")]
struct Cli {
    /// Log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Columns per indent level (at least 1).
    #[arg(
        long,
        global = true,
        env = "MINDMAP_INDENT_WIDTH",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    indent_width: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse outline text into a JSON graph.
    Parse(ParseArgs),
    /// Add radial positions to a JSON graph.
    Layout(JsonArgs),
    /// Export a JSON graph as outline text.
    Generate(InputArgs),
    /// Check a JSON graph against the tree invariants.
    Check(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    #[arg(long, short, default_value = "-", help = "Input file path, or - for stdin")]
    input: String,
}

#[derive(Args, Debug)]
struct JsonArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Emit single-line JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Args, Debug)]
struct ParseArgs {
    #[command(flatten)]
    json: JsonArgs,

    /// Run the radial layout before printing.
    #[arg(long, default_value_t = false)]
    layout: bool,
}

fn main() -> Result<(), CliError> {
    // Load .env first so clap's `env` fallbacks can see it.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let mut config = CompilerConfig::from_env()?;
    if let Some(width) = cli.indent_width {
        config.indent_width = width;
    }

    match cli.command {
        Command::Parse(args) => run_parse(&config, &args),
        Command::Layout(args) => run_layout(&config, &args),
        Command::Generate(args) => run_generate(&args),
        Command::Check(args) => run_check(&args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn run_parse(config: &CompilerConfig, args: &ParseArgs) -> Result<(), CliError> {
    let bytes = read_input(&args.json.input.input)?;
    let mut graph = mindmap::parse_bytes_with(&bytes, config.parse_options())?;
    if args.layout {
        mindmap::layout_with(&mut graph, &config.layout);
    }
    print_graph(&graph, args.json.compact)
}

fn run_layout(config: &CompilerConfig, args: &JsonArgs) -> Result<(), CliError> {
    let mut graph = read_graph(&args.input)?;
    mindmap::layout_with(&mut graph, &config.layout);
    print_graph(&graph, args.compact)
}

fn run_generate(args: &InputArgs) -> Result<(), CliError> {
    let graph = read_graph(args)?;
    print!("{}", mindmap::generate(&graph));
    Ok(())
}

fn run_check(args: &InputArgs) -> Result<(), CliError> {
    let graph = read_graph(args)?;
    graph.validate()?;
    println!("ok: {} nodes, {} edges", graph.nodes.len(), graph.edges.len());
    Ok(())
}

fn read_graph(args: &InputArgs) -> Result<MindmapGraph, CliError> {
    let bytes = read_input(&args.input)?;
    let text = std::str::from_utf8(&bytes).map_err(GraphError::from)?;
    Ok(MindmapGraph::from_json(text)?)
}

fn read_input(path: &str) -> Result<Vec<u8>, CliError> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|source| CliError::Read { path: "stdin".to_owned(), source })?;
        return Ok(buf);
    }
    fs::read(path).map_err(|source| CliError::Read { path: path.to_owned(), source })
}

fn print_graph(graph: &MindmapGraph, compact: bool) -> Result<(), CliError> {
    let json = if compact { graph.to_json()? } else { graph.to_json_pretty()? };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
