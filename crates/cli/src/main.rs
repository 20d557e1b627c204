use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use postdraft_core::{
    Document, FetchConfig, Generator, GeneratorConfig, Platform, RemoteConfig, Style, fetch_file, fetch_stdin,
    fetch_url,
};

mod echo;

use echo::{format_size, print_banner, print_info, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for generated drafts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Draft platform-ready social media posts from web pages
#[derive(Parser, Debug)]
#[command(name = "postdraft")]
#[command(author = "Postdraft Contributors")]
#[command(version = "0.3.0")]
#[command(about = "Draft social media posts from web pages", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Target platform (linkedin, twitter, instagram, facebook)
    #[arg(short, long, default_value = "linkedin", value_name = "PLATFORM")]
    platform: Platform,

    /// Post style (professional, modern, minimal)
    #[arg(short, long, default_value = "professional", value_name = "STYLE")]
    style: Style,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Base URL for resolving relative links in file or stdin input
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Fixed seed for reproducible hook selection
    #[arg(long, value_name = "NUM")]
    seed: Option<u64>,

    /// Print the extracted page summary as JSON and exit
    #[arg(long)]
    summary_only: bool,

    /// Delegate body generation to a remote model (requires POSTDRAFT_API_KEY)
    #[arg(long)]
    remote: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("postdraft_core=debug")),
            )
            .with_writer(std::io::stderr)
            .init();

        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let (html, size) = if args.input == "-" {
        if args.verbose {
            print_step(1, 4, "Reading from stdin");
        }
        let buffer = fetch_stdin().context("Failed to read from stdin")?;
        let len = buffer.len();
        (buffer, len)
    } else if args.input.starts_with("http://") || args.input.starts_with("https://") {
        if args.verbose {
            print_step(
                1,
                4,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }

        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args.user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
        };

        let content = fetch_url(&args.input, &config).await.context("Failed to fetch URL")?;
        let len = content.len();
        (content, len)
    } else {
        if args.verbose {
            print_step(1, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        let content = fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?;
        let len = content.len();
        (content, len)
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(size).bright_white());
        eprintln!();
    }

    if args.verbose {
        print_step(2, 4, "Extracting page summary");
    }

    let page_url = if args.input.starts_with("http") {
        Some(args.input.clone())
    } else {
        args.url.clone()
    };

    let doc = match &page_url {
        Some(url) => Document::parse_with_url(&html, url).context("Failed to parse HTML")?,
        None => Document::parse(&html).context("Failed to parse HTML")?,
    };
    let summary = doc.extract_summary();

    if args.verbose {
        eprintln!("  {} {}", "Title:".dimmed(), summary.title.bright_white());
        eprintln!(
            "  {} {}",
            "Key points:".dimmed(),
            summary.key_points.len().to_string().bright_white()
        );
        eprintln!();
    }

    if args.summary_only {
        let output = summary.to_json().context("Failed to serialize summary")?;
        return write_output(args.output, output);
    }

    if args.verbose {
        print_step(
            3,
            4,
            &format!(
                "Generating {} draft ({})",
                args.platform.key().bright_white(),
                format!("{:?}", args.style).to_lowercase()
            ),
        );
        eprintln!();
    }

    let mut config = GeneratorConfig::builder();
    if let Some(seed) = args.seed {
        config = config.seed(seed);
    }
    let generator = Generator::with_config(config.build());

    let draft = if args.remote {
        let remote = RemoteConfig::from_env().context("Remote generation requires POSTDRAFT_API_KEY")?;
        generator
            .generate_with_remote(&summary, args.platform, args.style, &remote)
            .await
    } else {
        generator.generate(&summary, args.platform, args.style)
    };

    let output = match args.format {
        OutputFormat::Text => draft.text(),
        OutputFormat::Json => draft.to_json().context("Failed to serialize draft")?,
    };

    if args.verbose {
        print_step(4, 4, "Writing output");
        eprintln!(
            "  {} {}",
            "Segments:".dimmed(),
            draft.segments().len().to_string().bright_white()
        );
        eprintln!();
    }

    write_output(args.output, output)
}

fn write_output(path: Option<PathBuf>, output: String) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(&path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }
    Ok(())
}
