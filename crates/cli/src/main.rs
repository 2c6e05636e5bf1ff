// ABOUTME: CLI for querying HTML/XML documents with CSS selectors.
// ABOUTME: Reads a document from a file or stdin and prints JSON per selector.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use dquery::{load_with_mime, Document, MimeType};
use serde_json::json;

/// Run CSS selectors against an HTML/XML document and output JSON.
#[derive(Parser, Debug)]
#[command(name = "dquery")]
#[command(about = "Query a document with CSS selectors and print JSON", long_about = None)]
struct Args {
    /// Document file path. Use "-" to read the document from stdin.
    target: String,

    /// CSS selector(s) to evaluate against the document.
    #[arg(required = true)]
    selectors: Vec<String>,

    /// MIME type hint for parsing: text/html (default) or text/xml.
    #[arg(long, default_value = "text/html")]
    mime: String,

    /// Also report this attribute of the first match for each selector.
    #[arg(long)]
    attr: Option<String>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns Ok(true) when at least one selector evaluated successfully.
fn run(args: &Args) -> Result<bool> {
    let mime: MimeType = args.mime.parse()?;
    let content = load_content(&args.target)?;

    let doc = match load_with_mime(&content, mime) {
        Ok(doc) => doc,
        Err(err) => {
            // The document itself is unusable; report and stop.
            print_json(
                &json!({ "ok": false, "error": err.to_string(), "results": [] }),
                args.compact,
            )?;
            return Ok(false);
        }
    };

    let results: Vec<serde_json::Value> = args
        .selectors
        .iter()
        .map(|selector| query_one(&doc, selector, args.attr.as_deref()))
        .collect();

    let matched = results
        .iter()
        .filter(|r| r.get("ok").and_then(|v| v.as_bool()) == Some(true))
        .count();
    let failed = results.len() - matched;

    // Output format:
    // - Single selector and ok => emit the result object directly
    // - Otherwise emit an envelope with results array and counts
    let output = if args.selectors.len() == 1 && failed == 0 {
        results.into_iter().next().unwrap_or_else(|| json!({}))
    } else {
        json!({
            "results": results,
            "total_selectors": args.selectors.len(),
            "matched": matched,
            "failed": failed
        })
    };

    print_json(&output, args.compact)?;
    Ok(matched > 0)
}

fn query_one(doc: &Document, selector: &str, attr: Option<&str>) -> serde_json::Value {
    match doc.select(selector) {
        Ok(sel) => {
            let html = if sel.is_empty() {
                None
            } else {
                sel.html().ok()
            };
            let attr_value = match attr {
                Some(key) if !sel.is_empty() => sel.attr(key).ok().flatten(),
                _ => None,
            };
            json!({
                "selector": selector,
                "ok": true,
                "count": sel.len(),
                "text": sel.text(),
                "html": html,
                "attr": attr_value,
                "error": null
            })
        }
        Err(err) => json!({
            "selector": selector,
            "ok": false,
            "count": 0,
            "text": null,
            "html": null,
            "attr": null,
            "error": err.to_string()
        }),
    }
}

fn print_json(value: &serde_json::Value, compact: bool) -> Result<()> {
    if compact {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

fn load_content(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read_to_string(path)?)
}
