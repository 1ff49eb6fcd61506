//! `oj` — command-line client for the judge platform.
//!
//! Manages contexts, authentication, browsing and code submission.
//! Think of it as `kubectl` for the judge.

mod commands;
mod config;

use clap::{Parser, Subcommand};

/// oj CLI tool.
#[derive(Parser, Debug)]
#[command(name = "oj", about = "Judge platform CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.oj/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage contexts (server connections).
    #[command(name = "context")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Switch the current context.
    #[command(name = "use")]
    Use {
        #[command(subcommand)]
        what: UseWhat,
    },

    /// Login to the current context's server.
    Login {
        /// Account name.
        #[arg(long)]
        user: Option<String>,
        /// Password (not recommended — use interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Logout — clear credentials from the current context.
    Logout,

    /// Re-authenticate with the saved token and show the session.
    Whoami,

    /// Get resource(s): problems, problem <id>, announcements,
    /// announcement <id>, discussions, solutions, status, record <id>,
    /// tags, rank, user <id>.
    Get {
        /// Resource type.
        resource: String,
        /// Optional resource id for single get.
        id: Option<String>,
        /// Page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Items per page.
        #[arg(long = "page-size", default_value_t = 20)]
        page_size: u32,
    },

    /// Submit code for grading.
    Submit {
        /// Problem id.
        problem: String,
        /// Language (e.g. cpp, java, python).
        #[arg(short = 'l', long)]
        language: String,
        /// Source file.
        #[arg(short = 'f', long)]
        file: String,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// Create a new context.
    Create {
        /// Context name.
        name: String,
        /// Server API base URL (e.g. http://judge.example.com/api).
        #[arg(long)]
        server: Option<String>,
    },
    /// List all contexts.
    List,
    /// Set properties on a context.
    Set {
        name: String,
        #[arg(long)]
        server: Option<String>,
    },
    /// Delete a context.
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum UseWhat {
    /// Switch to a context.
    Context { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);
    let output_json = cli.output == "json";

    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::Create { name, server } => {
                commands::context::create(&name, server.as_deref(), &config_path)?;
            }
            ContextAction::List => {
                commands::context::list(&config_path)?;
            }
            ContextAction::Set { name, server } => {
                commands::context::set(&name, server.as_deref(), &config_path)?;
            }
            ContextAction::Delete { name } => {
                commands::context::delete(&name, &config_path)?;
            }
        },

        Commands::Use { what } => match what {
            UseWhat::Context { name } => {
                commands::context::use_context(&name, &config_path)?;
            }
        },

        Commands::Login { user, password } => {
            let account = match user {
                Some(u) => u,
                None => {
                    eprint!("Account: ");
                    let mut s = String::new();
                    std::io::stdin().read_line(&mut s)?;
                    s.trim().to_string()
                }
            };
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };
            if account.is_empty() || password.is_empty() {
                anyhow::bail!("Account and password cannot be empty.");
            }
            commands::login::login(&account, &password, &config_path).await?;
        }

        Commands::Logout => {
            commands::login::logout(&config_path).await?;
        }

        Commands::Whoami => {
            commands::login::whoami(&config_path).await?;
        }

        Commands::Get { resource, id, page, page_size } => {
            commands::resource::get(&resource, id.as_deref(), page, page_size, output_json, &config_path).await?;
        }

        Commands::Submit { problem, language, file } => {
            commands::submit::submit(&problem, &language, std::path::Path::new(&file), &config_path).await?;
        }

        Commands::Version => {
            println!("oj {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
