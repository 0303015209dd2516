use std::path::PathBuf;

use clap::Parser;

/// Run admin GraphQL operations against the in-memory user service.
#[derive(Debug, Parser)]
#[command(name = "user_admin", version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "USER_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// GraphQL document to execute
    #[arg(short, long, required_unless_present = "sdl")]
    pub query: Option<String>,

    /// JSON object with variables for the document
    #[arg(long, requires = "query")]
    pub variables: Option<String>,

    /// Print the schema in SDL form and exit
    #[arg(long, conflicts_with = "query")]
    pub sdl: bool,
}
