use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use urlsmith::config::Config;
use urlsmith::{query_params, QueryParams, SrcsetOptions, UrlBuilder};

/// Urlsmith - build encoded and signed image CDN URLs
#[derive(Parser, Debug)]
#[command(name = "urlsmith")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (overrides --domain and --token)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CDN domain, e.g. assets.example.com
    #[arg(short, long)]
    domain: Option<String>,

    /// Signing token
    #[arg(short, long, env = "URLSMITH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Emit http instead of https URLs
    #[arg(long)]
    insecure: bool,

    /// Do not append the library identification parameter
    #[arg(long)]
    no_library_param: bool,

    /// Transformation parameter as key=value; may be repeated
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Print a srcset attribute instead of a single URL
    #[arg(long)]
    srcset: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Resource path or remote URL to proxy
    path: String,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("missing key in '{}'", raw)),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected key=value, got '{}'", raw)),
    }
}

fn builder_from_args(args: &Args) -> anyhow::Result<(UrlBuilder, SrcsetOptions)> {
    if let Some(path) = &args.config {
        let config = Config::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
        let srcset = config.srcset.clone();
        return Ok((config.into_builder()?, srcset));
    }

    let Some(domain) = &args.domain else {
        bail!("either --config or --domain is required");
    };

    let mut builder = UrlBuilder::new(domain.as_str())?
        .with_https(!args.insecure)
        .with_library_param(!args.no_library_param);
    if let Some(token) = &args.token {
        builder = builder.with_token(token.as_str());
    }
    Ok((builder, SrcsetOptions::default()))
}

fn run(args: Args) -> anyhow::Result<()> {
    let (builder, srcset_options) = builder_from_args(&args)?;
    let params: QueryParams = query_params(args.params.iter().cloned());

    if args.srcset {
        println!(
            "{}",
            builder.create_srcset(&args.path, &params, &srcset_options)?
        );
    } else {
        println!("{}", builder.create_url(&args.path, &params));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let logging = if args.verbose {
        urlsmith::logging::init_subscriber_with_filter("urlsmith=debug")
    } else {
        urlsmith::logging::init_subscriber()
    };
    if let Err(e) = logging {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(args) {
        tracing::error!(error = %e, "Failed to build URL");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
