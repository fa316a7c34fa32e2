// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(bin_name = "sfx")]
#[command(about = "🎵 Set up the sound effects for the Memory Match Game 🃏")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  sfx [\x1b[32mcommand\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    /// Omitting the subcommand runs `setup`.
    #[command(subcommand)]
    pub command: Option<CLICommand>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'c',
        help = "Print plain text without ANSI colors, eg: when piping output to a file"
    )]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "🎧 Create the `assets/sounds` folder and print the manual download guide\n💡 Eg: `sfx setup`"
    )]
    Setup,

    #[clap(
        about = "⬇️ Download one sound file from a direct URL\n💡 Eg: `sfx fetch https://example.com/flip.mp3 assets/sounds/flip.mp3`"
    )]
    Fetch {
        #[arg(value_name = "url", help = "Direct URL of the sound file to download")]
        url: String,

        #[arg(
            value_name = "destination",
            help = "File path to write the download to, eg: `assets/sounds/flip.mp3`"
        )]
        destination: PathBuf,
    },
}
