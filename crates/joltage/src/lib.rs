use std::fmt::Display;

use graph_rs::algorithms::params::CountOptions;
use log::info;
use serde::Serialize;

use crate::{
    adapters::{make_bag, parse_adapters},
    error::JoltageError,
};

pub mod adapters;
pub mod error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Product of the 1-jolt and 3-jolt difference counts.
    pub part1: usize,
    /// Number of adapter arrangements, kept as a decimal string since it
    /// does not fit any fixed width integer in general.
    pub part2: String,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "part 1: {}", self.part1)?;
        write!(f, "part 2: {}", self.part2)
    }
}

pub fn solve(input: &str, options: CountOptions, parallel: bool) -> Result<Report, JoltageError> {
    let bag = make_bag(parse_adapters(input)?)?;
    info!(
        "Bag holds {} ratings, device rated {}",
        bag.ratings().count(),
        bag.device()
    );

    Ok(Report {
        part1: bag.distribution_product(),
        part2: bag.arrangements(options, parallel)?.to_string(),
    })
}
