use anyhow::Result;
use clap::{Parser, Subcommand};

use semantic_versioning::cli::{self, SortWorkflowArgs};
use semantic_versioning::config::{self, Config};
use semantic_versioning::ui::{self, VersionReport};
use semantic_versioning::Version;

#[derive(Parser)]
#[command(
    name = "semantic-versioning",
    version,
    about = "Validate semantic versions and order them by precedence"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the parsed fields of a version
    Parse {
        #[arg(value_name = "VERSION")]
        input: String,

        #[arg(long, help = "Print the fields as a TOML table")]
        toml: bool,
    },

    /// Print whether LEFT is smaller (<), equal (=) or greater (>) than RIGHT
    Compare { left: String, right: String },

    /// Sort versions by precedence
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,

        #[arg(long, help = "Largest version first")]
        descending: bool,

        #[arg(
            long,
            conflicts_with = "descending",
            help = "Smallest version first, even if the config says otherwise"
        )]
        ascending: bool,

        #[arg(long, help = "Drop invalid versions instead of failing")]
        skip_invalid: bool,
    },

    /// Check that every argument is a valid semantic version
    Validate {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    if !config.output.color {
        ui::set_color(false);
    }

    match args.command {
        Command::Parse { input, toml } => parse_command(&input, toml),
        Command::Compare { left, right } => compare_command(&left, &right),
        Command::Sort {
            versions,
            descending,
            ascending,
            skip_invalid,
        } => {
            let order = if descending {
                Some(true)
            } else if ascending {
                Some(false)
            } else {
                None
            };
            let sort_args = SortWorkflowArgs {
                inputs: versions,
                descending: order,
                skip_invalid: skip_invalid.then_some(true),
            };
            sort_command(&sort_args, &config)
        }
        Command::Validate { versions } => validate_command(&versions),
    }
}

fn parse_command(input: &str, as_toml: bool) -> Result<()> {
    let version = match Version::parse(input) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let report = VersionReport::new(&version);
    if as_toml {
        print!("{}", toml::to_string(&report)?);
    } else {
        ui::display_report(&report);
    }
    Ok(())
}

fn compare_command(left: &str, right: &str) -> Result<()> {
    match cli::run_compare_workflow(left, right) {
        Ok((left, right, ordering)) => {
            println!("{}", ui::format_comparison(&left, &right, ordering));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn sort_command(args: &SortWorkflowArgs, config: &Config) -> Result<()> {
    let outcome = match cli::run_sort_workflow(args, config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for skipped in &outcome.skipped {
        ui::display_warning(&format!("Skipping {}", skipped));
    }
    for version in &outcome.sorted {
        println!("{}", version);
    }
    Ok(())
}

fn validate_command(inputs: &[String]) -> Result<()> {
    let mut all_valid = true;

    for result in cli::run_validate_workflow(inputs) {
        match result {
            Ok(version) => ui::display_success(&format!("{} is valid", version)),
            Err(e) => {
                all_valid = false;
                ui::display_error(&e.to_string());
            }
        }
    }

    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}
