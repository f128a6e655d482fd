use anyhow::Result;
use clap::{Parser, Subcommand};
use gitdump::areas::repository::RemoteRepository;
use std::io::Write;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "gitdump",
    version = "0.1.0",
    about = "Download entire Git repositories from publicly accessible .git folders over HTTP",
    long_about = "When a web server accidentally serves its internal .git directory, the loose \
    objects inside it are enough to reconstruct the committed working tree. \
    gitdump resolves HEAD, walks the object graph and writes the files back out.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "ls",
        about = "List the files reachable from the remote HEAD",
        long_about = "This command resolves HEAD, walks the object graph and prints one line per \
        reachable file: mode, object hash and relative path. Nothing is written to disk."
    )]
    Ls {
        #[arg(index = 1, help = "The repository URL, e.g. https://example.com/site")]
        url: String,
    },
    #[command(
        name = "dump",
        about = "Download all files reachable from the remote HEAD",
        long_about = "This command fetches every reachable blob and writes the working tree \
        below the target directory, creating it if necessary."
    )]
    Dump {
        #[arg(index = 1, help = "The repository URL, e.g. https://example.com/site")]
        url: String,
        #[arg(index = 2, help = "The directory to write files into (created if missing)")]
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Ls { url } => {
            let mut repository = RemoteRepository::new(url, Box::new(std::io::stdout()))?;
            repository.fetch()?;

            for entry in repository.files()?.entries() {
                writeln!(
                    repository.writer(),
                    "{} {} {}",
                    entry.mode,
                    entry.oid,
                    entry.path.display()
                )?;
            }
        }
        Commands::Dump { url, target } => {
            let mut repository = RemoteRepository::new(url, Box::new(std::io::stdout()))?;
            repository.fetch()?;

            let target = Path::new(target);
            std::fs::create_dir_all(target)?;

            repository.download(target)?
        }
    }

    Ok(())
}
