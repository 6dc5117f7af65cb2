use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flight_planner::config::{
    DEFAULT_CATALOG, DEFAULT_CONNECTIONS_OUTPUT, DEFAULT_DIRECT_OUTPUT, RunConfig,
};
use flight_planner::run::run;

/// Reads an `ORIGIN->DESTINATION` query from the first line of stdin.
#[derive(Parser, Debug)]
#[command(version, about = "Direct and one-stop flight reports from a flight catalog")]
struct Cli {
    /// Flight catalog to read.
    #[arg(long, env = "FLIGHTS_CATALOG", default_value = DEFAULT_CATALOG)]
    catalog: PathBuf,

    /// Where to write the direct-flights report.
    #[arg(long, env = "FLIGHTS_DIRECT_OUT", default_value = DEFAULT_DIRECT_OUTPUT)]
    direct_out: PathBuf,

    /// Where to write the one-stop connections report.
    #[arg(long, env = "FLIGHTS_INDIRECT_OUT", default_value = DEFAULT_CONNECTIONS_OUTPUT)]
    indirect_out: PathBuf,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig::new(cli.catalog, cli.direct_out, cli.indirect_out)
    }
}

fn main() {
    init_tracing();
    let config = RunConfig::from(Cli::parse());

    // Failures are reported as a single token on stdout; the exit status stays 0
    if let Err(err) = run(&config, io::stdin().lock()) {
        debug!(error = %err, "run failed");
        println!("{}", err.signal());
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
