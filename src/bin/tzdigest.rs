use std::process;
use std::time::Duration;

use clap::Parser;
use jiff::Timestamp;
use tzdigest::{
    handle_invocation, DispatchOutcome, DryRunNotifier, HttpNotifier, Matcher, Notifier,
    NotifierConfig, TickConfig, Window, ZoneTable,
};

#[derive(Parser)]
#[command(
    name = "tzdigest",
    about = "Send daily and weekly digest notifications to every time zone at its trigger hour",
    version
)]
struct Cli {
    /// Notification endpoint URL (required unless --dry-run)
    #[arg(long, env = "TZDIGEST_ENDPOINT")]
    endpoint: Option<String>,

    /// Token placed in every notification payload
    #[arg(long, env = "TZDIGEST_TOKEN", default_value = "", hide_env_values = true)]
    token: String,

    /// HTTP timeout in seconds (at least 1)
    #[arg(
        long,
        env = "TZDIGEST_TIMEOUT",
        default_value = "10",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Minutes after the trigger hour that still count as a match (the scheduler cadence)
    #[arg(long, env = "TZDIGEST_WINDOW", default_value_t = Window::DEFAULT_WIDTH)]
    window: u8,

    /// Evaluate this instant (RFC 3339) instead of the current time
    #[arg(long)]
    at: Option<String>,

    /// Raw scheduler event; logged and otherwise ignored
    #[arg(long)]
    event: Option<String>,

    /// Log matches instead of sending them
    #[arg(long)]
    dry_run: bool,

    /// Output the tick report as JSON
    #[arg(long)]
    json: bool,

    /// Print the zone table and exit
    #[arg(long)]
    list_zones: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.list_zones {
        list_zones(cli.json);
        process::exit(0);
    }

    let window = match Window::new(cli.window) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    let now = match cli.at {
        Some(ref at) => match at.parse::<Timestamp>() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("error: invalid --at timestamp: {e}");
                process::exit(2);
            }
        },
        None => Timestamp::now(),
    };

    let notifier: Box<dyn Notifier> = if cli.dry_run {
        Box::new(DryRunNotifier)
    } else {
        let Some(endpoint) = cli.endpoint else {
            eprintln!("error: --endpoint (or TZDIGEST_ENDPOINT) is required unless --dry-run");
            process::exit(2);
        };
        let mut config = NotifierConfig::new(endpoint, cli.token);
        config.timeout = Duration::from_secs(cli.timeout);
        match HttpNotifier::new(config) {
            Ok(n) => Box::new(n),
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(2);
            }
        }
    };

    let event = cli
        .event
        .as_deref()
        .map(|raw| serde_json::from_str(raw).unwrap_or_else(|_| serde_json::json!(raw)))
        .unwrap_or(serde_json::Value::Null);

    let matcher =
        match Matcher::new(notifier).with_config(TickConfig::default().with_window(window)) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(2);
            }
        };
    let report = match handle_invocation(&event, now, &matcher) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
        return;
    }

    for d in &report.dispatches {
        let status = match &d.outcome {
            DispatchOutcome::Delivered => "sent".to_string(),
            DispatchOutcome::Failed { error } => format!("failed: {error}"),
        };
        println!("{}\t{}\t{}\t{}", d.group, d.zone, d.kind, status);
    }
}

fn list_zones(json: bool) {
    let table = ZoneTable::builtin();
    if json {
        match serde_json::to_string_pretty(table) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
        return;
    }
    for group in table.groups() {
        println!("{}\t{}", group.label(), group.members().collect::<Vec<_>>().join(", "));
    }
}
