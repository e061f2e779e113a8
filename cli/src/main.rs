use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use publisher::{AccountIdentity, Client, CredentialStore};

const SUBCOMMANDS: &[&str] = &["publish", "convert", "help"];

#[derive(Parser)]
#[command(name = "telemark", version, about = "Publish markdown to telegra.ph")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a markdown file and publish it as a telegra.ph page
    Publish(PublishArgs),

    /// Print the converted node tree as JSON without publishing
    Convert(ConvertArgs),
}

#[derive(clap::Args)]
struct PublishArgs {
    /// Markdown source file ("-" reads standard input)
    file: String,

    /// Page title (defaults to the file's leading heading)
    #[arg(short, long)]
    title: Option<String>,

    /// Author name used if a new account has to be created
    #[arg(long, default_value = "telemark")]
    author: String,

    /// Account short name used if a new account has to be created
    #[arg(long, default_value = "telemark")]
    short_name: String,

    /// Credential file (defaults to the user configuration directory)
    #[arg(long)]
    credentials: Option<PathBuf>,

    /// Append "Published: <url>" to the source file afterwards
    #[arg(long)]
    append_url: bool,
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Markdown source file ("-" reads standard input)
    file: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Strip the leading heading and wrap the output as
    /// {"title": ..., "content": [...]}
    #[arg(long)]
    with_title: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Backwards compatibility: if the first positional arg is not a
    // known subcommand, inject "publish" so `telemark notes.md` works
    // like `telemark publish notes.md`.
    let mut args: Vec<String> = std::env::args().collect();
    if let Some(first_pos) = args.iter().skip(1).find(|a| !a.starts_with('-')) {
        let first_pos = first_pos.clone();
        if !SUBCOMMANDS.contains(&first_pos.as_str()) {
            let pos = args.iter().position(|a| *a == first_pos).unwrap();
            args.insert(pos, "publish".to_string());
        }
    }

    let cli = Cli::parse_from(&args);

    match cli.command {
        Command::Publish(args) => do_publish(args),
        Command::Convert(args) => do_convert(args),
    }
}

fn do_publish(args: PublishArgs) {
    let source = read_source(&args.file);

    let store = match args
        .credentials
        .clone()
        .or_else(CredentialStore::default_path)
    {
        Some(path) => CredentialStore::new(path),
        None => {
            eprintln!("error: no configuration directory available; pass --credentials");
            process::exit(1);
        }
    };

    let client = Client::new();
    let identity = AccountIdentity {
        short_name: args.short_name.clone(),
        author_name: args.author.clone(),
    };

    let published = match publisher::publish_markdown(
        &client,
        &store,
        &source,
        args.title.as_deref(),
        &identity,
    ) {
        Ok(published) => published,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    println!("{}", published.url);

    if args.append_url && args.file != "-" {
        let updated = format!("{}\n\nPublished: {}\n", source, published.url);
        if let Err(e) = std::fs::write(&args.file, updated) {
            eprintln!("warning: cannot update '{}': {}", args.file, e);
        }
    }
}

fn do_convert(args: ConvertArgs) {
    let source = read_source(&args.file);

    let output = if args.with_title {
        let (title, body) = telemark::split_title(&source);
        let document = serde_json::json!({
            "title": title.unwrap_or_default(),
            "content": telemark::markdown_to_nodes(body),
        });
        to_json(&document, args.pretty)
    } else {
        // Without the wrapper the whole input is the body; nothing is
        // stripped as a title.
        to_json(&telemark::markdown_to_nodes(&source), args.pretty)
    };

    println!("{}", output);
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match result {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: cannot encode JSON: {}", e);
            process::exit(1);
        }
    }
}

/// Read the markdown source, from stdin when the path is "-".
fn read_source(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buffer
    } else {
        match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    }
}
