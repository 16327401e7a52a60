//! archivist CLI entry point

use archivist::{
    answer::HttpAnswerGenerator,
    commands::{
        cmd_ask, cmd_create_collection, cmd_delete_collection, cmd_ingest, cmd_init,
        cmd_list_collections, cmd_list_documents, cmd_query, cmd_remove_document, cmd_status,
        print_ask_result, print_collections, print_documents, print_ingest_result,
        print_query_results, print_status, AskOptions, QueryOptions,
    },
    config::Config,
    error::Result,
    store::Store,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "archivist")]
#[command(version, about = "Local-first document retrieval and question answering", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize archivist configuration and database
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Ingest a text file into a collection
    Ingest {
        /// Path to the file
        path: PathBuf,

        /// Collection ID or name (defaults to the default collection)
        #[arg(short = 'C', long)]
        collection: Option<String>,
    },

    /// Retrieve the most relevant chunks for a query
    Query {
        /// The search query
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Restrict to a collection (ID or name)
        #[arg(short = 'C', long)]
        collection: Option<String>,
    },

    /// Ask a question answered from your documents
    Ask {
        /// The question
        query: String,

        /// Number of chunks used as context
        #[arg(short, long)]
        limit: Option<usize>,

        /// Restrict to a collection (ID or name)
        #[arg(short = 'C', long)]
        collection: Option<String>,
    },

    /// Manage collections
    Collections {
        #[command(subcommand)]
        action: CollectionAction,
    },

    /// List documents in a collection
    Documents {
        /// Collection ID or name (defaults to the default collection)
        collection: Option<String>,
    },

    /// Remove a document and its chunks
    Remove {
        /// Document ID
        document_id: String,
    },

    /// Show system status
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum CollectionAction {
    /// List all collections
    List,

    /// Create a new collection
    Create {
        /// Collection name
        name: String,
    },

    /// Delete a collection and everything in it
    Delete {
        /// Collection ID or name
        collection: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Init doesn't need an existing config
    if let Commands::Init { force } = &cli.command {
        let force = *force;
        let base_dir = cli.config.as_ref().and_then(|p| {
            if p.extension().map_or(false, |e| e == "toml") {
                p.parent().map(PathBuf::from)
            } else {
                Some(p.clone())
            }
        });
        let config = cmd_init(base_dir, force).await?;
        println!("✓ archivist initialized");
        println!("  Config: {}", config.paths.config_file.display());
        println!("\nNext steps:");
        println!("  1. Ingest a document: archivist ingest notes.txt");
        println!("  2. Ask a question:    archivist ask \"what do my notes say about X?\"");
        return Ok(());
    }

    // Completions don't need config or store
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "archivist", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let store = Store::open(&config.paths.db_file).await?;

    match cli.command {
        Commands::Init { .. } | Commands::Completions { .. } => unreachable!(),

        Commands::Ingest { path, collection } => {
            let document = cmd_ingest(&config, &store, &path, collection.as_deref()).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                print_ingest_result(&document);
            }
        }

        Commands::Query { query, limit, collection } => {
            let options = QueryOptions { k: limit, collection };
            let result = cmd_query(&config, &store, &query, options).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_query_results(&result);
            }
        }

        Commands::Ask { query, limit, collection } => {
            let generator = HttpAnswerGenerator::new(&config.answer, config.answer_api_key())?;
            let options = AskOptions { k: limit, collection };
            let result = cmd_ask(&config, &store, &generator, &query, options).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_ask_result(&result);
            }
        }

        Commands::Collections { action } => match action {
            CollectionAction::List => {
                let collections = cmd_list_collections(&config, &store).await?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&collections)?);
                } else {
                    print_collections(&collections);
                }
            }
            CollectionAction::Create { name } => {
                let collection = cmd_create_collection(&store, &name).await?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&collection)?);
                } else {
                    println!("✓ Created collection '{}' ({})", collection.name, collection.id);
                }
            }
            CollectionAction::Delete { collection } => {
                cmd_delete_collection(&config, &store, &collection).await?;
                println!("✓ Deleted collection '{}'", collection);
            }
        },

        Commands::Documents { collection } => {
            let documents = cmd_list_documents(&config, &store, collection.as_deref()).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&documents)?);
            } else {
                print_documents(&documents);
            }
        }

        Commands::Remove { document_id } => {
            cmd_remove_document(&store, &document_id).await?;
            println!("✓ Removed document {}", document_id);
        }

        Commands::Status => {
            let status = cmd_status(&config, &store).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print_status(&status);
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load(p),
        None => Config::load_from(None),
    }
}
