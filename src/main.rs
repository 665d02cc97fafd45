use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use trit::areas::repository::Repository;
use trit::artifacts::core::pager::CommandOutput;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter
const LOG_ENV: &str = "TRIT_LOG";

#[derive(Parser)]
#[command(
    name = "trit",
    version = "0.1.0",
    about = "A minimal single-user version control system",
    long_about = "Tracks a set of files, snapshots them into immutable commits \
    and organizes commits into branches. HEAD is either attached to a branch \
    or detached at a commit.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "work-tree",
        global = true,
        env = "TRIT_WORK_TREE",
        help = "Root of the repository (defaults to the current directory)"
    )]
    work_tree: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize an empty repository",
        long_about = "Creates an empty index, a branch registry holding only master, \
        attaches HEAD to master and leaves history empty."
    )]
    Init,
    #[command(name = "add", about = "Start tracking a file")]
    Add {
        #[arg(index = 1, help = "Path of the file, relative to the work tree")]
        path: String,
    },
    #[command(name = "rm", about = "Stop tracking a file (the file itself is kept)")]
    Rm {
        #[arg(index = 1, help = "Path of the tracked file")]
        path: String,
    },
    #[command(name = "status", about = "List tracked files")]
    Status,
    #[command(
        name = "commit",
        about = "Record the tracked files as a new commit",
        long_about = "Snapshots every tracked file into a new commit on the current branch. \
        The message must contain the required watermark."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "branch", about = "List branches, marking the current one")]
    Branch,
    #[command(
        name = "checkout",
        about = "Switch to a branch or detach at a commit",
        long_about = "Switches to the named branch, or detaches HEAD when given a commit \
        identifier. Tracked files are replaced with those of the target commit."
    )]
    Checkout {
        #[arg(short = 'b', help = "Create the branch at the current position first")]
        new_branch: bool,
        #[arg(index = 1, help = "Branch name or commit identifier")]
        target: String,
    },
    #[command(name = "log", about = "Show history from the current commit")]
    Log {
        #[arg(long, help = "Show at most this many commits")]
        limit: Option<usize>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    colored::control::set_override(std::io::stdout().is_terminal());

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let work_tree = match cli.work_tree {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let output = CommandOutput::detect(matches!(cli.command, Commands::Log { .. }));
    let mut repository = Repository::new(&work_tree, output.writer())?;

    match &cli.command {
        Commands::Init => repository.init()?,
        Commands::Add { path } => repository.add(path)?,
        Commands::Rm { path } => repository.rm(path)?,
        Commands::Status => {
            repository.status()?;
        }
        Commands::Commit { message } => {
            repository.commit(message)?;
        }
        Commands::Branch => repository.branch()?,
        Commands::Checkout { new_branch, target } => {
            repository.checkout(target, *new_branch)?;
        }
        Commands::Log { limit } => repository.log(*limit)?,
    }

    repository.writer().flush()?;
    drop(repository);

    output.finish()
}
