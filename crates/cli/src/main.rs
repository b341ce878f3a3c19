// ABOUTME: CLI for applying the datemark update pass to static HTML pages.
// ABOUTME: Reads a document from a file or stdin, rewrites marked date elements, writes HTML out.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use datemark::{format_tokens, rewrite_html};

/// Rewrite `ns-date-format` elements in an HTML document for a locale.
#[derive(Parser, Debug)]
#[command(name = "datemark-cli")]
#[command(about = "Format marked date elements in an HTML document", long_about = None)]
struct Args {
    /// HTML file to read, or "-" for stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Page URL (or bare path) used for locale resolution.
    #[arg(long, default_value = "/")]
    url: String,

    /// Write the rewritten document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print pass statistics as JSON on stderr.
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Print the recognized format tokens as JSON and exit.
    #[arg(long, default_value_t = false)]
    list_formats: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_formats {
        return print_format_table();
    }

    let html = load_input(&args.input)?;
    let (rewritten, stats) = rewrite_html(&html, &args.url);

    match &args.output {
        Some(path) => fs::write(path, &rewritten)
            .with_context(|| format!("writing {}", path.display()))?,
        None => io::stdout()
            .write_all(rewritten.as_bytes())
            .context("writing stdout")?,
    }

    if args.stats {
        eprintln!("{}", serde_json::to_string(&stats)?);
    }

    Ok(())
}

fn print_format_table() -> Result<()> {
    // serde_json's map keeps keys sorted, which is what we want here.
    let mut table = serde_json::Map::new();
    for (token, options) in format_tokens() {
        table.insert(token.to_string(), serde_json::to_value(options)?);
    }
    println!("{}", serde_json::to_string_pretty(&serde_json::Value::Object(table))?);
    Ok(())
}

fn load_input(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(target).with_context(|| format!("reading {}", target))
}
