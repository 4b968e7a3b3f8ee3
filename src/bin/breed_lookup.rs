//! breed-lookup — 从本地品种列表文件查询子品种（带缓存）的命令行工具
//!
//! Usage:
//!   breed-lookup [--data <path>] [--stats-json] <breed>...

use anyhow::{bail, Context};
use breed_cache::{BreedFetcher, CachingBreedFetcher, LookupConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// What the command line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    Lookup {
        config: LookupConfig,
        breeds: Vec<String>,
    },
    Help,
    Version,
}

fn print_usage() {
    println!(
        r#"breed-lookup — cached sub-breed lookups

USAGE:
    breed-lookup [OPTIONS] <BREED>...

OPTIONS:
    --data <path>       Breed-list file (JSON or YAML)
    --stats-json        Print cache statistics as JSON
    -V, --version       Show version information
    -h, --help          Show this help message

ENVIRONMENT:
    BREED_DATA_PATH     Breed-list file, used when --data is not given
    BREED_STATS_JSON    Set to 1 to print statistics as JSON
    RUST_LOG            Log filter (default: warn)"#
    );
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses arguments on top of `config`, so flags override environment values.
fn parse_args<I>(args: I, mut config: LookupConfig) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut breeds = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data" => {
                let path = iter.next().context("--data requires a path")?;
                config = config.with_data_path(path);
            }
            "--stats-json" => config = config.with_json_stats(true),
            "--version" | "-V" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
            breed => breeds.push(breed.to_string()),
        }
    }

    if breeds.is_empty() {
        bail!("no breeds given");
    }
    Ok(Command::Lookup { config, breeds })
}

/// One output line per breed. Errors other than "not found" abort the run.
fn render_lookup<F: BreedFetcher>(fetcher: &F, breed: &str) -> anyhow::Result<String> {
    match fetcher.sub_breeds(breed) {
        Ok(subs) if subs.is_empty() => Ok(format!("{breed}: (no sub-breeds)")),
        Ok(subs) => Ok(format!("{breed}: {}", subs.join(", "))),
        Err(e) if e.is_not_found() => Ok(format!("{breed}: not found")),
        Err(e) => Err(e).with_context(|| format!("lookup of {breed} failed")),
    }
}

fn render_stats<F: BreedFetcher>(
    fetcher: &CachingBreedFetcher<F>,
    json: bool,
) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&fetcher.stats())?)
    } else {
        Ok(format!("source calls: {}", fetcher.calls_made()))
    }
}

fn run() -> anyhow::Result<()> {
    let command = match parse_args(std::env::args().skip(1), LookupConfig::from_env()) {
        Ok(command) => command,
        Err(e) => {
            print_usage();
            return Err(e);
        }
    };

    let (config, breeds) = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("breed-lookup {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Lookup { config, breeds } => (config, breeds),
    };

    init_logging();

    let source = config.load_source().context("failed to load breed data")?;
    let fetcher = CachingBreedFetcher::new(source);

    for breed in &breeds {
        println!("{}", render_lookup(&fetcher, breed)?);
    }
    println!("{}", render_stats(&fetcher, config.json_stats)?);
    Ok(())
}
