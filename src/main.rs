use anyhow::Result;
use clap::Parser;
use retime::areas::repository::Repository;
use retime::commands::restore::RestoreOptions;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "retime",
    version = "0.1.0",
    about = "Restore working tree modification times from git history",
    long_about = "Git stamps every checked-out file with the current clock, \
    which throws away when things actually changed. This command walks the \
    first-parent history of a repository and resets each tracked file and \
    directory to the time of the commit that last touched it.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The path to the repository root")]
    path: PathBuf,
    #[arg(
        long,
        value_name = "N",
        help = "Traverse at most N commits back from HEAD (0 means unlimited)"
    )]
    max_depth: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let repository = Repository::open(&cli.path)?;
    let opts = RestoreOptions {
        max_depth: cli.max_depth.filter(|depth| *depth > 0),
    };

    repository.restore_times(&opts)?;

    Ok(())
}
