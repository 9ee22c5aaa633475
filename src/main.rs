use clap::Parser;
use tracing_subscriber::EnvFilter;

use birthbook::cli::input::parse_month_day;
use birthbook::{Directory, FixedClock, MonthDay};

/// Address book that keeps track of phone numbers and birthdays.
#[derive(Parser, Debug)]
#[command(name = "birthbook", version)]
struct Args {
    /// Use this date (MM/DD) as today instead of the system date
    #[arg(long, value_parser = parse_month_day)]
    today: Option<MonthDay>,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match args.today {
        Some(today) => {
            tracing::info!(today = %today, "using fixed date");
            birthbook::cli::run(Directory::with_clock(FixedClock(today))).map(|_| ())
        }
        None => birthbook::cli::run(Directory::new()).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
