use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::Level;

use omeka2rdf::api::OmekaClient;
use omeka2rdf::config::Config;
use omeka2rdf::persist::{save_graph, Format};
use omeka2rdf::resolver::{InMemoryMediaResolver, MediaResolver, NoMediaResolver};
use omeka2rdf::source::{load_dir, RecordSet};
use omeka2rdf::{
    initialize_graph, transform_collections, transform_items, transform_media, BatchReport,
    Category, Graph, NamespaceTable,
};

/// Convert Omeka S items, media and item sets to RDF.
#[derive(Parser)]
#[command(name = "omeka2rdf", version, about)]
struct Cli {
    /// Directory holding items.json, media.json and item_sets.json.
    #[arg(long, value_name = "DIR", conflicts_with = "api_url")]
    input_dir: Option<PathBuf>,

    /// Omeka S site root to fetch records from.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Output format: ntriples, turtle.
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Write one graph for all categories.
    #[arg(long)]
    combined: bool,

    /// Don't resolve item media (no foaf:depiction statements).
    #[arg(long)]
    no_media: bool,

    /// API key identity.
    #[arg(long, value_name = "KEY")]
    key_identity: Option<String>,

    /// API key credential.
    #[arg(long, value_name = "KEY")]
    key_credential: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(url) = cli.api_url {
        config.api_url = Some(url);
    }
    if cli.key_identity.is_some() {
        config.key_identity = cli.key_identity;
    }
    if cli.key_credential.is_some() {
        config.key_credential = cli.key_credential;
    }
    if let Some(dir) = cli.output {
        config.output.directory = dir;
    }
    if let Some(format) = &cli.format {
        config.format = format.parse::<Format>()?;
    }
    config.combined |= cli.combined;

    let namespaces = config.namespace_table();

    // Records come either from disk or from the API.
    let (records, client) = match (&cli.input_dir, &config.api_url) {
        (Some(dir), _) => (load_dir(dir)?, None),
        (None, Some(url)) => {
            let mut client = OmekaClient::new(url).with_per_page(config.per_page);
            if let (Some(identity), Some(credential)) =
                (config.key_identity.clone(), config.key_credential.clone())
            {
                client = client.with_credentials(identity, credential);
            }
            let records = RecordSet {
                items: client.fetch_category(Category::Items)?,
                media: client.fetch_category(Category::Media)?,
                collections: client.fetch_category(Category::Collections)?,
            };
            (records, Some(client))
        }
        (None, None) => {
            return Err("no input: pass --input-dir or --api-url, or set api_url in the config".into());
        }
    };

    let local_media;
    let resolver: &dyn MediaResolver = if cli.no_media {
        &NoMediaResolver
    } else if let Some(client) = &client {
        client
    } else {
        local_media = InMemoryMediaResolver::from_records(&records.media);
        &local_media
    };

    let reports = if config.combined {
        let mut graph = initialize_graph(&namespaces);
        let reports = convert_all(&records, &namespaces, resolver, &mut graph);
        save_graph(&graph, Category::Combined, config.format, &config.output);
        reports
    } else {
        let mut reports = Vec::new();
        for category in [Category::Items, Category::Media, Category::Collections] {
            let mut graph = initialize_graph(&namespaces);
            reports.push(convert(category, &records, &namespaces, resolver, &mut graph));
            save_graph(&graph, category, config.format, &config.output);
        }
        reports
    };

    if !cli.quiet {
        for report in &reports {
            eprintln!(
                "Converted {} of {} {} ({} statements, {} failed)",
                report.converted,
                report.total(),
                report.category,
                report.statements,
                report.failures.len()
            );
        }
    }

    Ok(())
}

fn convert(
    category: Category,
    records: &RecordSet,
    namespaces: &NamespaceTable,
    resolver: &dyn MediaResolver,
    graph: &mut Graph,
) -> BatchReport {
    match category {
        Category::Items => transform_items(&records.items, namespaces, resolver, graph),
        Category::Media => transform_media(&records.media, graph),
        Category::Collections => transform_collections(&records.collections, graph),
        Category::Combined => BatchReport::new(Category::Combined),
    }
}

fn convert_all(
    records: &RecordSet,
    namespaces: &NamespaceTable,
    resolver: &dyn MediaResolver,
    graph: &mut Graph,
) -> Vec<BatchReport> {
    [Category::Items, Category::Media, Category::Collections]
        .into_iter()
        .map(|category| convert(category, records, namespaces, resolver, graph))
        .collect()
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
