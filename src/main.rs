use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use fileswitcher::{
    commands::{self, SCAN_DIR},
    config::{Config, DEFAULT_CONFIG_FILE},
    logging,
    ui::{ColorMode, Ui},
};

#[derive(Parser)]
#[command(name = "fileswitcher")]
#[command(about = "FileSwitcher can switch the file of the specified path with hard link.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Target file (overrides the config file)
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Link the target file into the current directory as the default variant
    Init,

    /// List the variants that can be used with the set command
    List,

    /// Switch the target file to the named variant
    Set {
        /// Variant name as shown by list (exactly one)
        #[arg(num_args = 0..)]
        names: Vec<String>,
    },

    /// Show the variant the target file currently points to
    Current,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = Ui::new(cli.color, cli.no_color);
    logging::init(cli.verbose, ui.color_enabled);

    match run(cli, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.println(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, ui: &Ui) -> Result<()> {
    let load = || Config::load(&cli.config, cli.target.as_deref());
    let dir = Path::new(SCAN_DIR);

    match cli.command {
        Commands::Init => {
            commands::init(&load()?, dir, ui);
        }
        Commands::List => {
            commands::list(&load()?, dir, ui);
        }
        Commands::Set { names } => {
            commands::set(&load()?, dir, &names, ui);
        }
        Commands::Current => {
            commands::current(&load()?, dir, ui);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "fileswitcher",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
