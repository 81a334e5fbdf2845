use std::env;

use stockbot_core::config::Config;
use stockbot_match::ProductMatcher;
use stockbot_text::Extractor;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: stockbot <match|stock|alternatives|analyze> [args...]
  match \"<customer text>\"         resolve a message against the catalog
  stock \"<product name>\"          look up a single product
  alternatives <category> [brand]  in-stock items of the same category
  analyze \"<customer text>\"       show the extracted attributes only";

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    args.remove(0);
    if args.is_empty() { eprintln!("{}", USAGE); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn required(args: &[String], what: &str) -> String {
    args.first().cloned().unwrap_or_else(|| {
        eprintln!("Missing {}\n{}", what, USAGE); std::process::exit(1)
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let (cmd, args) = parse_args();

    if cmd == "analyze" {
        let text = required(&args, "customer text");
        let extractor = Extractor::new(config.matching()?.similarity_threshold);
        return print_json(&extractor.analyze(&text));
    }

    let matcher = ProductMatcher::from_config(&config)?;
    let rt = tokio::runtime::Runtime::new()?;
    match cmd.as_str() {
        "match" => {
            let text = required(&args, "customer text");
            print_json(&rt.block_on(matcher.find(&text)))?;
        }
        "stock" => {
            let name = required(&args, "product name");
            match rt.block_on(matcher.check_stock(&name)) {
                Some(found) => print_json(&found)?,
                None => { tracing::info!(product = %name, "not in catalog"); println!("null"); }
            }
        }
        "alternatives" => {
            let category = required(&args, "category");
            let brand = args.get(1).map(String::as_str);
            print_json(&rt.block_on(matcher.find_alternatives(&category, brand)))?;
        }
        _ => { eprintln!("Unknown command: {}\n{}", cmd, USAGE); std::process::exit(1); }
    }
    Ok(())
}
