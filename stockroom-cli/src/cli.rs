//! Command-line arguments

use clap::Parser;
use clap::Subcommand;
use simplelog::LevelFilter;
use stockroom_lib::config::ResourceKind;

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version)]
#[command(about = "Inventory management from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Write logs to this file instead of the cache directory
    #[arg(short = 'l', long, value_name = "PATH", global = true)]
    pub log_file: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = parse_level,
        global = true
    )]
    pub log_level: LevelFilter,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30, global = true)]
    pub timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the route table
    Routes,

    /// Open the screen at PATH and list what it manages
    View { path: String },

    /// List every record of a resource
    List { resource: ResourceKind },

    /// Show one record
    Get { resource: ResourceKind, id: i64 },

    /// Create a name-only catalog record (categories, colors, sizes, genders, states, order-emails)
    Create {
        resource: ResourceKind,
        /// Asked for interactively when omitted
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Delete a record after confirmation
    Delete {
        resource: ResourceKind,
        id: i64,
        /// Skip the confirmation dialog
        #[arg(short, long)]
        yes: bool,
    },

    /// List the line items of an order
    Items { order_id: i64 },

    /// Search products by name
    Search { name: String },

    /// Look a product up by SKU
    Sku { sku: String },
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delete() {
        let cli = Cli::try_parse_from(["stockroom", "delete", "color", "4", "--yes"]).unwrap();
        match cli.command {
            Command::Delete { resource, id, yes } => {
                assert_eq!(resource, ResourceKind::Colors);
                assert_eq!(id, 4);
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_unknown_resource_rejected() {
        assert!(Cli::try_parse_from(["stockroom", "list", "widgets"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["stockroom", "routes", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }
}
