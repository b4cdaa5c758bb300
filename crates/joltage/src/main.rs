use std::{fs, path::PathBuf};

use clap::Parser;
use graph_rs::algorithms::params::{CountOptions, SinkPolicy, VertexOrder};
use joltage::{error::JoltageError, solve};
use log::info;

#[derive(Parser)]
#[command(version, about = "Chain joltage adapters from the socket to the device")]
struct Cli {
    /// Adapter ratings, one per line
    in_file: PathBuf,

    /// Print the answers as JSON
    #[arg(short, long)]
    json: bool,

    /// Count the arrangements antichain by antichain in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Visit adapters in topological order instead of by rating
    #[arg(short, long)]
    topological: bool,

    /// Count every adapter without successors as a complete chain
    #[arg(long)]
    any_sink: bool,

    /// Skip checking that every connection goes to a higher rating
    #[arg(long)]
    trust_input: bool,
}

impl Cli {
    fn count_options(&self) -> CountOptions {
        let order = if self.topological {
            VertexOrder::Topological
        } else {
            VertexOrder::Ascending
        };
        let sink_policy = if self.any_sink {
            SinkPolicy::AnySink
        } else {
            SinkPolicy::EndOnly
        };

        CountOptions::default()
            .with_order(order)
            .with_sink_policy(sink_policy)
            .with_validate(!self.trust_input)
    }
}

fn main() -> Result<(), JoltageError> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Reading adapters from {:?}", cli.in_file);
    let input = fs::read_to_string(&cli.in_file)?;

    let report = solve(&input, cli.count_options(), cli.parallel)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
