use anyhow::Result;
use clap::Parser;

use marquee_client::Config;
use marquee_core::MovieId;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog service base URL, without port (default: http://localhost)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Catalog service port (default: 3900)
    #[arg(long, global = true)]
    port: Option<u16>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List the genres known to the catalog
    Genres,
    /// List the movies in the catalog
    Movies,
    /// Create a new movie
    ///
    /// Each field is validated as it is entered:
    ///
    /// - title: required, at least 5 characters
    /// - genre: required, must name an existing genre
    /// - stock: whole number from 0 to 100
    /// - rate: number from 0 to 10
    ///
    /// Nothing is sent unless every field is valid. On success the movie is
    /// saved and the client returns to the movie list.
    New {
        #[command(flatten)]
        fields: commands::movie::FieldArgs,
    },
    /// Edit an existing movie
    ///
    /// The movie is located in the current movie list by its exact id. Only
    /// the fields given are changed; the rest keep their stored values.
    Edit {
        /// Id of the movie to edit
        id: String,

        #[command(flatten)]
        fields: commands::movie::FieldArgs,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print a config value, or the whole config file
    Get {
        /// Config key (e.g. base_url, port)
        key: Option<String>,
    },
    /// Set a config value in the config file
    Set { key: String, value: String },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

/// Load the effective configuration: file and environment, then CLI flags.
fn load_config(base_url: Option<String>, port: Option<u16>) -> Result<Config> {
    Ok(Config::load()?.with_overrides(base_url, port))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Genres => {
            let config = load_config(cli.base_url, cli.port)?;
            commands::list_genres(&config).await?;
        }
        Commands::Movies => {
            let config = load_config(cli.base_url, cli.port)?;
            commands::list_movies(&config).await?;
        }
        Commands::New { fields } => {
            let config = load_config(cli.base_url, cli.port)?;
            commands::run_new(&config, fields).await?;
        }
        Commands::Edit { id, fields } => {
            let config = load_config(cli.base_url, cli.port)?;
            commands::run_edit(&config, MovieId::new(id), fields).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Get { key } => commands::config::get_config(key)?,
            ConfigAction::Set { key, value } => commands::config::set_config(&key, &value)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
