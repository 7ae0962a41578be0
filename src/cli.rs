//! CLI definitions and command routing.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::{default_domains, Paths, Settings};
use crate::entry::BlockEntry;
use crate::hostnames::HostnameSource;
use crate::linefile::LineFile;
use crate::patcher::HostsPatcher;
use crate::platform;

#[derive(Parser)]
#[command(name = "hostblock")]
#[command(about = "Block distracting hostnames via the hosts file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add block entries for every managed hostname to the hosts file
    Block,
    /// Remove every line mentioning a managed hostname from the hosts file
    Unblock,
    /// Display the current hosts file content
    Print,
    /// List the effective hostnames (blocklist file, else built-in defaults)
    Hosts,
}

/// Run CLI and dispatch to handlers. A missing or unrecognized command
/// prints usage and exits 0.
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            e.print()?;
            return Ok(());
        }
        Err(_) => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    let paths = Paths::default_paths();
    let settings = Settings::load(&paths)?;

    match cli.command {
        Commands::Block => cmd_block(&paths, &settings),
        Commands::Unblock => cmd_unblock(&paths, &settings),
        Commands::Print => cmd_print(&paths, &settings),
        Commands::Hosts => cmd_hosts(&paths, &settings),
    }
}

/// Wire the patch engine for one invocation.
fn patcher(paths: &Paths, settings: &Settings) -> HostsPatcher {
    HostsPatcher::new(
        LineFile::new(&paths.hosts_file),
        BlockEntry::new(settings.address.clone()),
        HostnameSource::new(&paths.blocklist_file, default_domains()),
    )
}

fn cmd_block(paths: &Paths, settings: &Settings) -> Result<()> {
    let count = patcher(paths, settings).block()?;
    if settings.flush_dns {
        platform::flush_dns();
    }
    println!("Blocked {count} hostnames in {}", paths.hosts_file.display());
    Ok(())
}

fn cmd_unblock(paths: &Paths, settings: &Settings) -> Result<()> {
    patcher(paths, settings).unblock()?;
    if settings.flush_dns {
        platform::flush_dns();
    }
    println!("Unblocked managed hostnames in {}", paths.hosts_file.display());
    Ok(())
}

fn cmd_print(paths: &Paths, settings: &Settings) -> Result<()> {
    let content = patcher(paths, settings).print()?;
    print!("{content}");
    Ok(())
}

fn cmd_hosts(paths: &Paths, settings: &Settings) -> Result<()> {
    for hostname in patcher(paths, settings).hostnames() {
        println!("{hostname}");
    }
    Ok(())
}
