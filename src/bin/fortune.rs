use anyhow::{bail, Context};
use mystic_fortune::config::config;
use mystic_fortune::domain::validation::{error_messages, validate_request};
use mystic_fortune::domain::{calculate_fortune, share_text, DayKey, FortuneRequest, Locale};
use mystic_fortune::templates::BuiltinTemplates;
use chrono::Datelike;
use std::io::Read;

const USAGE: &str = "usage: fortune [--locale en|ko] [--date YYYY-MM-DD] [request.json]";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut locale: Locale = config().default_locale;
    let mut day = DayKey::today();
    let mut path: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--locale" => {
                let value = args.next().context(USAGE)?;
                locale = value.parse()?;
            }
            "--date" => {
                let value = args.next().context(USAGE)?;
                day = value.parse()?;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => {
                if path.is_some() {
                    bail!(USAGE);
                }
                path = Some(other.to_string());
            }
        }
    }

    let raw = match &path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {p}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let request: FortuneRequest = serde_json::from_str(&raw).context("parsing request JSON")?;

    let invalid = validate_request(&request, day.date().year());
    if !invalid.is_empty() {
        bail!("invalid request: {:?}", error_messages(&invalid, locale));
    }

    let result = calculate_fortune(&request, locale, day, &BuiltinTemplates)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    println!();
    println!("{}", share_text(&result, locale));

    Ok(())
}
