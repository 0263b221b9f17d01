//! Command-line interface implementation for forge.
//! Provides argument parsing and the dispatch of `init` and `new`.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    config::ROOT_DIR,
    error::{Error, Result},
    generator::{format_summary, Generator},
    init::init_root,
    prompt::{stdio_prompter, CollectedData},
};

/// Command-line arguments structure for forge.
#[derive(Parser, Debug)]
#[command(author, version, about = "forge: generate files from named template sets", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the definitions directory with a sample generator
    Init(InitArgs),

    /// Generate files from a generator.
    ///
    /// Prompt values may be given after the generator name as
    /// `--<prompt>=value` or `--<prompt> value`; prompts given a non-empty
    /// value this way are not asked interactively.
    ///
    /// `--root`, `--output-dir` and `--skip-overwrite-check` must come before
    /// the generator name; everything after it is read as prompt values.
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to create
    #[arg(long, value_name = "DIR", default_value = ROOT_DIR)]
    pub root: PathBuf,

    /// Replace an existing sample definition without asking
    #[arg(long)]
    pub skip_overwrite_check: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Directory holding generator definitions and templates
    #[arg(long, value_name = "DIR", default_value = ROOT_DIR)]
    pub root: PathBuf,

    /// Directory output paths are relative to (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite existing files without asking
    #[arg(long)]
    pub skip_overwrite_check: bool,

    /// Name of the generator to run
    #[arg(value_name = "GENERATOR")]
    pub generator: String,

    /// Prompt values, `--<prompt>=value` (options go before GENERATOR)
    #[arg(value_name = "PROMPT_VALUES", trailing_var_arg = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            let _ = Args::command().print_help();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

/// Parses `--<prompt>=value` / `--<prompt> value` pairs.
///
/// A repeated name keeps the last value.
///
/// # Errors
/// * `Error::ArgumentError` for anything that is not a long flag, or a flag
///   without a value
pub fn parse_prompt_values(values: &[String]) -> Result<CollectedData> {
    let mut data = CollectedData::new();
    let mut iter = values.iter();

    while let Some(arg) = iter.next() {
        let flag = arg
            .strip_prefix("--")
            .filter(|flag| !flag.is_empty())
            .ok_or_else(|| Error::ArgumentError(format!("unexpected argument '{arg}'")))?;

        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name.to_string(), value.to_string()),
            None => {
                let value = iter.next().ok_or_else(|| {
                    Error::ArgumentError(format!("flag needs an argument: --{flag}"))
                })?;
                (flag.to_string(), value.clone())
            }
        };
        data.insert(name, value);
    }

    Ok(data)
}

/// Runs a parsed command.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => run_init(args),
        Command::New(args) => run_new(args),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let prompt = stdio_prompter();
    match init_root(&*prompt, &args.root, args.skip_overwrite_check)? {
        Some(_) => println!("Initialized."),
        None => println!("Kept existing definition in {}.", args.root.display()),
    }
    Ok(())
}

fn run_new(args: NewArgs) -> Result<()> {
    let supplied = parse_prompt_values(&args.values)?;
    let prompt = stdio_prompter();

    let generator = Generator::new(&*prompt, &args.root)
        .with_output_dir(args.output_dir.unwrap_or_default())
        .with_skip_overwrite_check(args.skip_overwrite_check);
    let plan = generator.prepare(&args.generator, &supplied)?;

    println!("Start generating...");
    let files = generator.generate(&plan)?;

    println!("{}", format_summary(&files));
    println!("Done.");
    Ok(())
}
