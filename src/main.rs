use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use taskline::cli::args::{Cli, Commands};
use taskline::cli::commands;
use taskline::config::{ColorSetting, Config};
use taskline::error::TasklineError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TasklineError> {
    let cli = Cli::parse();
    let config = Config::load()?;

    apply_color_setting(config.general.color);
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(&args, format)?,
        Commands::Batch(args) => commands::batch(&args, format)?,
        Commands::Prompt(args) => commands::prompt(&args)?,
        Commands::Groups(args) => commands::groups(&args, &config, format)?,
        Commands::Completions { shell } => {
            commands::completions(shell);
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn apply_color_setting(setting: ColorSetting) {
    match setting {
        ColorSetting::Auto => {}
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
    }
}
