//! Command-line interface for markup-tree
//! This binary tokenizes markup files and prints their tokens or tree in different formats.
//!
//! Usage:
//!   markup-tree execute `<path>` [--format `<format>`] [--config `<file>`] [--strict]
//!   markup-tree demo                                - Print tokens and tree for a built-in sample
//!   markup-tree list-formats                        - List all available formats
//!
//! `<path>` may be `-` to read from stdin. Settings come from the built-in defaults, then
//! `markup-tree.toml` in the working directory if present, then `--config`, then flags.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use std::path::PathBuf;

use markup_tree::markup::config::{Loader, MarkupConfig};
use markup_tree::markup::formats::to_print_str;
use markup_tree::markup::lexer::tokenize;
use markup_tree::markup::parser::parse;
use markup_tree::markup::processor::{
    available_formats, process_file, process_source, ProcessOptions, ProcessingError,
    ProcessingSpec,
};
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "markup-tree.toml";
const DEMO_SOURCE: &str = "<html><body><div>Hello <b>world</b></div></body></html>";

fn main() {
    let matches = Command::new("markup-tree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for tokenizing markup and inspecting its tree")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(
            Command::new("execute")
                .about("Tokenize or parse a markup file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-simple', 'tree-print')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Reject unterminated, stray and mismatched tags"),
                ),
        )
        .subcommand(Command::new("demo").about("Print tokens and tree for a built-in sample"))
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    setup_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("execute", execute_matches)) => handle_execute_command(execute_matches),
        Some(("demo", _)) => {
            handle_demo_command();
            Ok(())
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<MarkupConfig, ProcessingError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("strict") {
        loader = loader.set_override("parse.mode", "strict")?;
    }
    Ok(loader.build()?)
}

/// Handle the execute command
fn handle_execute_command(matches: &ArgMatches) -> Result<(), ProcessingError> {
    let config = load_config(matches)?;
    let spec = ProcessingSpec::from_string(&config.output.format)?;
    let options = ProcessOptions::from(&config);

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    tracing::info!(path, format = %spec.name(), "executing");

    let output = if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| ProcessingError::Io {
                path: PathBuf::from("-"),
                source,
            })?;
        process_source(&source, &spec, &options)?
    } else {
        process_file(path, &spec, &options)?
    };

    print!("{}", output);
    Ok(())
}

/// Handle the demo command: the token list, then the tree
fn handle_demo_command() {
    println!("Tokens:");
    for token in tokenize(DEMO_SOURCE) {
        println!("{}: {}", token.kind(), token.payload());
    }

    println!("\nDOM Tree:");
    print!("{}", to_print_str(&parse(DEMO_SOURCE)));
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
