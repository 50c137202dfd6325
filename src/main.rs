use clap::{Parser, Subcommand};
use colored::Colorize;
use mygit::areas::repository::Repository;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mygit",
    version = "0.1.0",
    about = "A minimal version control system",
    long_about = "mygit records snapshots of a working directory as content-addressed \
    objects, links them into a commit history and supports branches, merges and diffs.",
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
        long,
        global = true,
        help = "Working directory of the repository (defaults to the current directory)"
    )]
    dir: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Print debug logs to stderr")]
    verbose: bool,
    #[arg(long, global = true, help = "Disable coloured output")]
    no_color: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "Create the .mygit directory with an empty main branch and index."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage a file, or every file with '.'",
        long_about = "Store the file content as a blob and append it to the index. \
        Files matching .mygitignore are skipped."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage, or '.' for the whole working directory")]
        path: String,
    },
    #[command(name = "status", about = "List the staged files")]
    Status,
    #[command(name = "unstage", about = "Remove files from the index")]
    Unstage {
        #[arg(long, conflicts_with = "files", help = "Unstage every file")]
        all: bool,
        #[arg(index = 1, required_unless_present = "all", help = "The files to unstage")]
        files: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Record the staged files as a new commit",
        long_about = "Create a commit from the index on top of HEAD and clear the index."
    )]
    Commit {
        #[arg(index = 1, required = true, num_args = 1.., help = "The commit message")]
        message: Vec<String>,
    },
    #[command(name = "log", about = "Show the commit history of HEAD")]
    Log,
    #[command(
        name = "branch",
        about = "Create a branch, or list branches when no name is given"
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch, or detach HEAD at a commit"
    )]
    Checkout {
        #[arg(index = 1, help = "The branch name or full commit digest")]
        target: String,
    },
    #[command(name = "current-branch", about = "Show the current branch")]
    CurrentBranch,
    #[command(
        name = "merge",
        about = "Merge a branch into the current branch",
        long_about = "Find a common ancestor, resolve the two tips against it and write \
        the result to merged_file.txt. A clean merge creates a merge commit."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "diff",
        about = "Compare a file with its staged version, or two branches"
    )]
    Diff {
        #[arg(index = 1, help = "A file name, or the first branch")]
        first: String,
        #[arg(index = 2, help = "The second branch")]
        second: Option<String>,
    },
    #[command(name = "clone", about = "Copy a repository into a new directory")]
    Clone {
        #[arg(index = 1, help = "The repository to copy")]
        source: PathBuf,
        #[arg(index = 2, help = "The destination directory")]
        destination: PathBuf,
    },
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("mygit=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "off".into())
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(error) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), error);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let mut repository = Repository::new(&dir.to_string_lossy(), Box::new(std::io::stdout()))?;

    match cli.command {
        Commands::Init => repository.init()?,
        Commands::Add { path } => repository.add(&path)?,
        Commands::Status => repository.status()?,
        Commands::Unstage { all, files } => {
            if all {
                repository.unstage_all()?
            } else {
                repository.unstage(&files)?
            }
        }
        Commands::Commit { message } => repository.commit(&message.join(" "))?,
        Commands::Log => repository.log()?,
        Commands::Branch { name } => match name {
            Some(name) => repository.branch(&name)?,
            None => repository.list_branches()?,
        },
        Commands::Checkout { target } => repository.checkout(&target)?,
        Commands::CurrentBranch => repository.current_branch()?,
        Commands::Merge { branch } => repository.merge(&branch)?,
        Commands::Diff { first, second } => match second {
            Some(second) => repository.diff_branches(&first, &second)?,
            None => repository.diff_file(&first)?,
        },
        Commands::Clone {
            source,
            destination,
        } => repository.clone_into(&source, &destination)?,
    }

    repository.writer().flush()?;

    Ok(())
}
