use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wsgen::{AppError, RecordFields};

#[derive(Parser)]
#[command(name = "wsgen")]
#[command(version)]
#[command(
    about = "Generate web-app deployment descriptors for EJB web-service endpoints",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate web.xml and jboss-web.xml into a temporary web archive
    #[clap(visible_alias = "g")]
    Generate {
        /// Deployment manifest (TOML, or YAML with a .yml/.yaml extension)
        manifest: PathBuf,
        /// Configuration file (defaults to ./wsgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print a JSON summary instead of the archive URL
        #[arg(long)]
        json: bool,
    },
    /// Render a JSON monitoring record as it is written to the debug log
    Record {
        /// Record file (JSON)
        file: PathBuf,
        /// Omit the message type and hosts
        #[arg(long)]
        no_message_type: bool,
        /// Omit the date
        #[arg(long)]
        no_date: bool,
        /// Omit the operation
        #[arg(long)]
        no_operation: bool,
        /// Omit the headers
        #[arg(long)]
        no_headers: bool,
        /// Omit the envelope
        #[arg(long)]
        no_envelope: bool,
    },
    /// Compose the hash code of string fields
    Hash {
        /// Field values, folded in order
        values: Vec<String>,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wsgen=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Generate { manifest, config, json } => {
            match wsgen::generate(&manifest, config.as_deref())? {
                Some(archive) if json => {
                    let summary = serde_json::to_string_pretty(&archive).map_err(|e| {
                        AppError::ParseError { what: "summary".into(), details: e.to_string() }
                    })?;
                    println!("{}", summary);
                }
                Some(archive) => println!("✅ Generated web app at {}", archive.url),
                None => println!("Nothing to generate: deployment has no EJB endpoints"),
            }
        }
        Commands::Record {
            file,
            no_message_type,
            no_date,
            no_operation,
            no_headers,
            no_envelope,
        } => {
            let fields = RecordFields {
                message_type: !no_message_type,
                date: !no_date,
                operation: !no_operation,
                headers: !no_headers,
                envelope: !no_envelope,
                ..RecordFields::default()
            };
            println!("{}", wsgen::render_record(&file, fields)?);
        }
        Commands::Hash { values } => {
            println!("{}", wsgen::hash_values(values.as_slice()));
        }
    }
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
