//! argpass - inspect pre-parsed command input.

use anyhow::{Context, Result};
use argpass::{Definition, Input, OptionValue, PassthroughInput};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::fs;

/// Inspect pre-parsed command input through the input contract.
#[derive(Parser, Debug)]
#[command(name = "argpass", version, about, disable_help_subcommand = true)]
struct Cli {
    /// Pre-parsed arguments as a JSON object, or @path to a JSON file
    #[arg(long, default_value = "{}")]
    arguments: String,

    /// Pre-parsed options as a JSON object, or @path to a JSON file
    #[arg(long, default_value = "{}")]
    options: String,

    /// Command name to record as the first argument
    #[arg(long)]
    command: Option<String>,

    /// Treat the invocation as non-interactive
    #[arg(long)]
    non_interactive: bool,

    /// Input definition to bind, as JSON or @path (accepted, never enforced)
    #[arg(long)]
    definition: Option<String>,

    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand, Debug)]
enum Query {
    /// Print the first argument in insertion order
    First,

    /// Print an argument value (empty output if absent)
    Argument {
        /// Argument name to look up
        name: String,
    },

    /// Print an option value
    Option {
        /// Candidate option names, tried in order
        #[arg(required = true)]
        names: Vec<String>,

        /// Value to print when no candidate matches; without it a single
        /// missing name is an error
        #[arg(long)]
        default: Option<String>,
    },

    /// Print true/false for membership in the argument or option set
    Has {
        /// Name to check
        name: String,

        /// Check the option set instead of the arguments
        #[arg(long)]
        option: bool,
    },

    /// Print the full input state as JSON
    Dump,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    print!("{}", run(cli)?);
    Ok(())
}

/// Build the facade from the CLI flags and answer the query.
fn run(cli: Cli) -> Result<String> {
    let arguments: IndexMap<String, String> =
        load_mapping(&cli.arguments).context("failed to load arguments")?;
    let options: HashMap<String, OptionValue> =
        load_mapping(&cli.options).context("failed to load options")?;

    let mut input = PassthroughInput::new(arguments, options);
    if let Some(command) = cli.command {
        input = input.with_command(command);
    }
    if cli.non_interactive {
        input = input.with_interactive(false);
    }

    if let Some(ref spec) = cli.definition {
        let definition: Definition = load_mapping(spec).context("failed to load definition")?;
        input.bind(&definition)?;
        input.validate()?;
    }

    let line = match cli.query {
        Query::First => input.first_argument().unwrap_or("").to_string(),
        Query::Argument { name } => input.argument(&name).to_string(),
        Query::Option { names, default } => {
            let candidates: Vec<&str> = names.iter().map(String::as_str).collect();
            match default {
                Some(default) => input
                    .parameter_option(&candidates, OptionValue::from(default))
                    .to_string(),
                None if candidates.len() == 1 => input
                    .option(candidates[0])
                    .context("option lookup failed")?
                    .to_string(),
                None => input
                    .parameter_option(&candidates, OptionValue::Absent)
                    .to_string(),
            }
        }
        Query::Has { name, option } => {
            let present = if option {
                input.has_option(&name)
            } else {
                input.has_argument(&name)
            };
            present.to_string()
        }
        Query::Dump => dump(&input)?,
    };

    Ok(format!("{}\n", line))
}

/// Deserialize a JSON value supplied inline or as `@path` to a file.
fn load_mapping<T: DeserializeOwned>(spec: &str) -> Result<T> {
    let json = match spec.strip_prefix('@') {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?
        }
        None => spec.to_string(),
    };
    serde_json::from_str(&json).context("failed to parse JSON mapping")
}

/// Render the facade state as JSON, options sorted by key for
/// deterministic output.
fn dump(input: &PassthroughInput) -> Result<String> {
    let options: BTreeMap<&String, &OptionValue> = input.options().iter().collect();
    let state = serde_json::json!({
        "arguments": input.arguments(),
        "options": options,
        "interactive": input.is_interactive(),
    });
    serde_json::to_string_pretty(&state).context("failed to serialize input state")
}
