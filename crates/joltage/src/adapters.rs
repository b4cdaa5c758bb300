use std::{
    collections::{BTreeSet, HashMap},
    ops::Bound::{Excluded, Included},
};

use graph_rs::{
    DirectedGraph, GraphError,
    algorithms::{params::CountOptions, path_count::PathCount},
    builder::make_graph,
};
use itertools::Itertools;
use log::{debug, info};
use num_bigint::BigUint;

use crate::error::JoltageError;

pub type Rating = u64;

/// Rating of the charging outlet every chain starts from.
pub const SOCKET: Rating = 0;

/// An adapter takes an input up to this many jolts below its rating.
pub const MAX_STEP: Rating = 3;

/// Highest adapter rating that still leaves room for the device.
pub const MAX_RATING: Rating = Rating::MAX - MAX_STEP;

/// Every adapter in the bag plus the socket and the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag(BTreeSet<Rating>);

impl Bag {
    /// Adds the socket and the device, which is rated [`MAX_STEP`] above the
    /// highest adapter.
    pub fn new(adapters: impl IntoIterator<Item = Rating>) -> Result<Self, JoltageError> {
        let mut ratings = BTreeSet::from_iter(adapters);
        ratings.insert(SOCKET);

        let highest = ratings.last().copied().unwrap_or(SOCKET);
        let device = highest
            .checked_add(MAX_STEP)
            .ok_or(JoltageError::DeviceOutOfRange { highest })?;
        ratings.insert(device);

        Ok(Self(ratings))
    }

    pub fn ratings(&self) -> impl Iterator<Item = Rating> + '_ {
        self.0.iter().copied()
    }

    pub fn device(&self) -> Rating {
        self.0.last().copied().unwrap_or(SOCKET)
    }

    /// Adapters in the bag that accept the output of `adapter`.
    pub fn successors(&self, adapter: Rating) -> impl Iterator<Item = Rating> + '_ {
        self.0
            .range((Excluded(adapter), Included(adapter.saturating_add(MAX_STEP))))
            .copied()
    }

    /// One `(provider, consumer)` edge per possible connection.
    pub fn edges(&self) -> Vec<(Rating, Rating)> {
        self.ratings()
            .flat_map(|adapter| self.successors(adapter).map(move |s| (adapter, s)))
            .collect()
    }

    /// How often each difference occurs when chaining every adapter in
    /// ascending order.
    pub fn joltage_distribution(&self) -> HashMap<Rating, usize> {
        self.ratings().tuple_windows().map(|(a, b)| b - a).counts()
    }

    /// Number of 1-jolt differences times number of 3-jolt differences.
    pub fn distribution_product(&self) -> usize {
        let distribution = self.joltage_distribution();
        debug!("Joltage differences: {distribution:?}");

        distribution.get(&1).unwrap_or(&0) * distribution.get(&3).unwrap_or(&0)
    }

    /// Number of distinct adapter chains from the socket to the device.
    pub fn arrangements(
        &self,
        options: CountOptions,
        parallel: bool,
    ) -> Result<BigUint, GraphError<Rating>> {
        let graph = make_graph(self.edges())?;
        info!(
            "Adapter graph: {} adapters, {} connections",
            graph.vertex_count(),
            graph.edge_count()
        );

        if !graph.contains(SOCKET) {
            debug!("Nothing accepts the socket output");
            return Ok(BigUint::ZERO);
        }

        if parallel {
            graph.par_count_paths_with(SOCKET, self.device(), options)
        } else {
            graph.count_paths_with(SOCKET, self.device(), options)
        }
    }
}

pub fn make_bag(adapters: impl IntoIterator<Item = Rating>) -> Result<Bag, JoltageError> {
    Bag::new(adapters)
}

/// One rating per line, blank lines are skipped. Ratings above
/// [`MAX_RATING`] are rejected.
pub fn parse_adapters(input: &str) -> Result<Vec<Rating>, JoltageError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, text)| {
            let line = index + 1;
            let value = text.trim();
            let rating = value
                .parse::<Rating>()
                .map_err(|source| JoltageError::InvalidRating {
                    line,
                    value: value.to_string(),
                    source,
                })?;

            if rating > MAX_RATING {
                return Err(JoltageError::RatingOutOfRange {
                    line,
                    value: rating,
                });
            }

            Ok(rating)
        })
        .collect()
}
