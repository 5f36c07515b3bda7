use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ruya_infrastructure::ConfigService;
use ruya_infrastructure::logging::init_logging;

mod commands;
mod display;
mod input;

#[derive(Parser)]
#[command(name = "ruya")]
#[command(about = "Ruya DMS - role-aware document browser", long_about = None)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse documents interactively (default)
    Repl,
    /// Print the view for a role as JSON
    Render {
        /// admin, manager or employee; omit to render the login screen
        #[arg(long)]
        role: Option<String>,
        /// Search query to apply
        #[arg(long)]
        query: Option<String>,
        /// Document to select in the list
        #[arg(long)]
        select: Option<String>,
        /// Document to open on its detail screen
        #[arg(long)]
        document: Option<String>,
    },
    /// Show what each role can see
    Roles,
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to locate config file")?,
    };
    let config = service.load().context("Failed to load configuration")?;
    init_logging(&config.logging.level);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl::run(&config)?,
        Commands::Render {
            role,
            query,
            select,
            document,
        } => {
            let request = commands::render::RenderRequest {
                role,
                query,
                select,
                document,
            };
            commands::render::run(&config, &request)?
        }
        Commands::Roles => display::print_lines(&display::render_capability_table()),
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(&service),
            ConfigAction::Show => commands::config::show(&config)?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::try_parse_from(["ruya", "render", "--role", "admin", "--document", "2"])
            .unwrap();
        match cli.command {
            Some(Commands::Render { role, document, .. }) => {
                assert_eq!(role.as_deref(), Some("admin"));
                assert_eq!(document.as_deref(), Some("2"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_repl() {
        let cli = Cli::try_parse_from(["ruya", "--config", "/tmp/ruya.toml"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ruya.toml")));
    }
}
