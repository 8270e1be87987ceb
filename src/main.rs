use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use roadmapper::api::{self, AppState};
use roadmapper::catalog::Catalog;
use roadmapper::client::RoadmapClient;
use roadmapper::config::Config;
use roadmapper::generator::RoadmapGenerator;
use roadmapper::models::{CreateRoadmapInput, Roadmap};
use roadmapper::store::MemoryStore;

#[derive(Parser)]
#[command(name = "roadmapper")]
#[command(about = "Personal developer roadmaps with dated milestones")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Roadmapper server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for HTTP API
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
    /// List available development paths
    Paths,
    /// Print a random quote
    Quote,
    /// Create a roadmap
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: Option<String>,

        /// Interest path id, repeat for several
        #[arg(short, long = "interest", required = true)]
        interests: Vec<String>,

        /// Timeframe in months (1-24)
        #[arg(short, long)]
        timeframe: u32,
    },
    /// Show a roadmap
    Show { id: Uuid },
    /// Mark a milestone as completed
    Complete {
        id: Uuid,
        index: i64,

        /// Mark the milestone as not completed instead
        #[arg(long)]
        undo: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "roadmapper=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let config = Config::from_env();
    let generator = match config.seed {
        Some(seed) => RoadmapGenerator::seeded(Catalog::builtin(), seed),
        None => RoadmapGenerator::new(Catalog::builtin()),
    };
    let state = AppState::new(generator, MemoryStore::new());
    let app = api::create_router_with_config(state, config.security);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(
        "Roadmapper listening on http://{}/api/v1",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_roadmap(roadmap: &Roadmap) {
    println!("{} ({} months, until {})", roadmap.name, roadmap.timeframe, roadmap.end_date);
    println!("\"{}\" - {}", roadmap.quote.text, roadmap.quote.author);
    println!();
    for (index, entry) in roadmap.milestones.iter().enumerate() {
        let mark = if entry.completed { "x" } else { " " };
        println!(
            "{:>3} [{}] {}  {:<16} {}",
            index, mark, entry.target_date, entry.path, entry.milestone
        );
    }
    println!();
    println!("Progress: {:.0}%", roadmap.progress());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let command = cli.command.unwrap_or(Commands::Serve {
        host: "127.0.0.1".to_string(),
        port: 5000,
    });

    match command {
        Commands::Serve { host, port } => serve(&host, port).await?,
        Commands::Paths => {
            let paths = RoadmapClient::from_env().paths().await?;
            for path in paths.available_paths {
                println!("{}", path);
            }
        }
        Commands::Quote => {
            let quote = RoadmapClient::from_env().quote().await?;
            println!("\"{}\" - {}", quote.text, quote.author);
        }
        Commands::Create {
            name,
            email,
            interests,
            timeframe,
        } => {
            let client = RoadmapClient::from_env();
            let created = client
                .create_roadmap(&CreateRoadmapInput {
                    name: Some(name),
                    email,
                    interests: Some(interests),
                    timeframe: Some(timeframe.into()),
                })
                .await?;
            println!("{}", created.roadmap_id);
            print_roadmap(&client.get_roadmap(created.roadmap_id).await?);
        }
        Commands::Show { id } => {
            print_roadmap(&RoadmapClient::from_env().get_roadmap(id).await?);
        }
        Commands::Complete { id, index, undo } => {
            let updated = RoadmapClient::from_env()
                .update_milestone(id, index, !undo)
                .await?;
            println!(
                "{}: {} ({:.0}% done{})",
                updated.message,
                updated.milestone().milestone,
                updated.update.progress,
                if updated.update.all_completed { ", roadmap complete" } else { "" }
            );
        }
    }

    Ok(())
}
