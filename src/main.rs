//! screen locker configuration tool

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rslock::{Config, Result, enums::LockState, util::die};

#[derive(Parser)]
#[command(version, about = "check and print the screen locker config")]
struct Cli {
    /// Lua config to use instead of `$XDG_CONFIG_HOME/rslock/config.lua`
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Validate the config and resolve the user and group
    Check,
    /// Print the effective config as Lua
    Dump,
}

fn check(config: &Config) -> Result<()> {
    let (uid, gid) = config.identity().resolve()?;
    println!("user {} ({uid}), group {} ({gid})", config.user, config.group);
    for state in LockState::ALL {
        let color = config.color(state);
        println!("{:>6}: {color} (#{:06x})", state.name(), color.rgb().pixel());
    }
    println!("text color {}, font {}", config.text_color, config.font_name);
    println!(
        "message {:?}, failonclear {}, cancel within {}s",
        config.message,
        config.failonclear,
        config.time_to_cancel().as_secs()
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_home()?,
    };
    match cli.command {
        Cmd::Check => check(&config),
        Cmd::Dump => {
            print!("{}", config.to_lua());
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        die(&format!("rslock: {e}"));
    }
}
