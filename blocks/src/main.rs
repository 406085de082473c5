use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rsblocks::{Error, Result, StatusTable};

#[derive(Parser)]
#[command(version, about = "inspect and test status bar blocks")]
struct Cli {
    /// Lua config to use instead of `$XDG_CONFIG_HOME/rsblocks/config.lua`
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Validate the config and list its blocks
    Check,
    /// Print the effective config as Lua
    Dump,
    /// Run a single block once and print what it would display
    Run { index: usize },
}

/// Print `msg` to stderr and exit with status 1
fn die(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn run(cli: Cli) -> Result<()> {
    let table = match cli.config {
        Some(path) => StatusTable::load(path)?,
        None => StatusTable::load_home()?,
    };
    match cli.command {
        Cmd::Check => {
            for (i, block) in table.iter().enumerate() {
                let signal = match block.rt_signal() {
                    Some(sig) => format!("signal {} ({sig})", block.signal),
                    None => "no signal".to_owned(),
                };
                println!(
                    "{i}: {:?} every {}s, {signal}",
                    block.command.trim(),
                    block.interval
                );
            }
            println!(
                "{} blocks, delimiter {:?}",
                table.len(),
                table.delimiter().to_string()
            );
        }
        Cmd::Dump => print!("{}", table.to_lua()),
        Cmd::Run { index } => {
            let block =
                table.get(index).ok_or(Error::NoSuchBlock(index))?;
            println!("{}", block.run()?);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        die(&format!("rsblocks: {e}"));
    }
}
