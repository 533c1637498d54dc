// CLI module - command-line argument parsing and handlers
//
// Provides a flag to override the initial color mode plus subcommands for
// configuration management:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};

/// Hookbox - interactive widget playground for the terminal
#[derive(Parser)]
#[command(name = "hookbox")]
#[command(version = VERSION)]
#[command(about = "Interactive widget playground for the terminal", long_about = None)]
pub struct Cli {
    /// Initial color mode: "light" or "dark" (overrides config file)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                // No flag provided, show usage
                println!("Usage: hookbox config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the TUI
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("color_mode = {:?}", config.color_mode);
    println!("use_theme_background = {}", config.use_theme_background);
    println!("toast_duration_ms = {}", config.toast_duration_ms);
    println!("tick_rate_ms = {}", config.tick_rate_ms);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_prefix = {:?}", config.logging.file_prefix);
    println!("file_rotation = {:?}", config.logging.file_rotation);
}

fn handle_config_reset() {
    match Config::write_template() {
        Ok(path) => println!("Config reset to defaults: {}", path.display()),
        Err(e) => {
            eprintln!("Error: Could not reset config: {}", e);
            std::process::exit(1);
        }
    }
}
