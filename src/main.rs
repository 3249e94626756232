use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_pseudoversion::cli::orchestration::{run_pseudo_version_workflow, PseudoVersionArgs};
use git_pseudoversion::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-pseudoversion",
    version,
    about = "Print a semantic pseudo-version for the HEAD revision of a git repository"
)]
struct Args {
    #[arg(help = "Directory inside the repository (read from stdin when omitted)")]
    dir: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Major version prefix for untagged revisions, e.g. v2")]
    major: Option<String>,

    #[arg(short, long, help = "Base tag to use instead of searching the history")]
    tag: Option<String>,

    #[arg(long, conflicts_with = "tag", help = "Ignore tags and treat HEAD as untagged")]
    no_tags: bool,

    #[arg(short, long, help = "Log diagnostics to stderr")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let dir = match args.dir {
        Some(dir) => dir,
        None => match ui::read_directory_from_stdin() {
            Ok(dir) => dir,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
    };

    let workflow_args = PseudoVersionArgs {
        dir,
        config_path: args.config,
        major: args.major,
        tag: args.tag,
        no_tags: args.no_tags,
    };

    let result = match run_pseudo_version_workflow(&workflow_args) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }
    if let Some(tag) = &result.base_tag {
        if args.verbose {
            ui::display_status(&format!("Based on tag {}", tag));
        }
    }

    println!("{}", result.pseudo_version);
    Ok(())
}
