use std::{fmt::Display, iter::Copied, slice::Iter, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{GraphError, Vertex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList<V> {
    edges: Box<[(V, V)]>,
}

impl<V: Vertex> EdgeList<V> {
    pub fn new(edges: Vec<(V, V)>) -> Self {
        Self {
            edges: edges.into_boxed_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> Copied<Iter<'_, (V, V)>> {
        self.edges.iter().copied()
    }
}

impl<V: Vertex> FromIterator<(V, V)> for EdgeList<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        EdgeList::new(iter.into_iter().collect())
    }
}

/// Parses one `start end` pair per line. Blank lines are skipped.
impl<V> TryFrom<&str> for EdgeList<V>
where
    V: Vertex + FromStr,
    <V as FromStr>::Err: Display,
{
    type Error = GraphError<V>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut result: Vec<(V, V)> = vec![];

        for (index, line) in value.lines().enumerate() {
            let line_number = index + 1;
            let parse_err = |reason: String| -> GraphError<V> {
                GraphError::Parse {
                    line: line_number,
                    reason,
                }
            };

            let mut tokens = line.split_whitespace();
            let Some(source) = tokens.next() else {
                continue;
            };
            let target = tokens
                .next()
                .ok_or_else(|| parse_err("No target found!".to_string()))?;

            if let Some(extra) = tokens.next() {
                return Err(parse_err(format!("unexpected token '{extra}'")));
            }

            let source = V::from_str(source)
                .map_err(|e| parse_err(format!("invalid source '{source}': {e}")))?;
            let target = V::from_str(target)
                .map_err(|e| parse_err(format!("invalid target '{target}': {e}")))?;

            result.push((source, target));
        }

        Ok(EdgeList::new(result))
    }
}
