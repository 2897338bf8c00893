use clap::{Parser, Subcommand};
use small_blog::core::normalize;
use small_blog::domain::ports::ContentClient;
use small_blog::render;
use small_blog::utils::{logger, validation::{self, Validate}};
use small_blog::{BlogError, HttpContentClient, Pager, SiteConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "small-blog")]
#[command(about = "A small terminal reader for headless CMS blogs")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the content API endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the post listing
    List {
        /// How many pages to load, counting the first one
        #[arg(long, default_value = "1")]
        pages: usize,

        /// Keep loading until the store reports no further pages
        #[arg(long)]
        all: bool,

        /// Posts requested per page (overrides config)
        #[arg(long)]
        page_size: Option<usize>,

        /// Print the listing as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fetch and print a single post by its slug
    Show {
        /// Slug identifier of the post
        slug: String,

        /// Print the post as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::default(),
    };
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 Set api.endpoint in a config file or pass --endpoint");
        std::process::exit(1);
    }

    let client = HttpContentClient::from_config(&config)?;

    match cli.command {
        Commands::List {
            pages,
            all,
            page_size,
            json,
        } => {
            let page_size = page_size.unwrap_or(config.api.page_size);
            let mut pager = Pager::open(client, page_size).await?;

            let mut loaded_pages = 1usize;
            while pager.has_more() && (all || loaded_pages < pages) {
                if let Err(e) = pager.load_next().await {
                    // keep what we already have; the user retries by rerunning
                    tracing::error!("Loading further posts failed: {}", e);
                    eprintln!(
                        "⚠ load more failed ({}); showing the {} posts already loaded",
                        e,
                        pager.posts().len()
                    );
                    break;
                }
                loaded_pages += 1;
            }

            if json {
                println!("{}", render::listing_json(pager.posts())?);
            } else {
                if !config.site.title.is_empty() {
                    println!("{}\n", config.site.title);
                }
                print!("{}", render::listing(pager.posts()));
                if pager.has_more() {
                    println!("(more posts available; rerun with --all or a higher --pages)");
                }
            }
            tracing::info!("Listed {} posts over {} pages", pager.posts().len(), loaded_pages);
        }

        Commands::Show { slug, json } => {
            validation::validate_non_empty_string("slug", &slug)?;

            match client.get_by_slug(&slug).await {
                Ok(raw) => {
                    let detail = normalize::detail(&raw);
                    if json {
                        println!("{}", render::post_json(&detail)?);
                    } else {
                        print!("{}", render::post(&detail));
                    }
                }
                Err(BlogError::NotFoundError { slug }) => {
                    tracing::warn!("No document for slug: {}", slug);
                    eprintln!("post not found: {}", slug);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
