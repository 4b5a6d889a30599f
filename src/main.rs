use clap::Parser;
use std::env;
use std::io;
use std::path::PathBuf;
use tar_shell::core::{error::Result, print_error, ShellConfig};
use tar_shell::{Session, Shell};

#[derive(Parser)]
#[command(name = "tar-shell")]
#[command(about = "Shell emulator over the contents of a tar archive")]
#[command(version)]
struct Cli {
    /// User name shown in the prompt
    username: String,

    /// Host name shown in the prompt
    hostname: String,

    /// Path to the .tar (or .tar.gz) archive to explore
    archive: PathBuf,

    /// Commands to run before reading from standard input
    script: Option<PathBuf>,

    /// Read settings from this file instead of the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ShellConfig::load_from(path)?,
        None => ShellConfig::load()?,
    };
    if cli.no_color {
        config.color = false;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    let session = Session::open(&cli.archive, &config)?;
    let mut shell = Shell::new(cli.username, cli.hostname, session, &config);
    let mut stdout = io::stdout().lock();

    if let Some(script) = &cli.script {
        shell.run_script_file(script, &mut stdout)?;
    }
    if !shell.exit_requested() {
        shell.run(io::stdin().lock(), &mut stdout)?;
    }

    log::debug!(
        "Session ended in {} with {} directories and {} files",
        shell.session().current_dir(),
        shell.session().fs().dir_count(),
        shell.session().fs().file_count()
    );
    Ok(())
}
