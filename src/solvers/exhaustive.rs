use std::ops::Range;

use log::{debug, warn};
use rayon::prelude::*;

use super::{Assignment, AssignmentSolver, Distance, DistanceMatrix, Route};

/// Subsets are `u64` bitmasks, one bit per group-cab pair.
const MAX_PAIRS: usize = 63;
/// Past this many pairs the search takes noticeably long.
const SLOW_PAIRS: usize = 24;
const CHUNK_SIZE: u64 = 1 << 14;

/// Tries every subset of group-cab pairs.
///
/// Bit `i` of a subset selects group `i / cabs` with cab `i % cabs`. A subset
/// is a valid assignment when every group is selected exactly once and no
/// cab more than once. The first cheapest subset in increasing order wins.
#[derive(Default, Clone, Debug)]
pub struct Exhaustive {
    parallel: bool,
}

impl Exhaustive {
    pub fn new(parallel: bool) -> Self {
        Exhaustive { parallel }
    }
}

impl AssignmentSolver for Exhaustive {
    fn name(&self) -> String {
        "exhaustive".to_owned()
    }

    fn max_pairs(&self) -> Option<usize> {
        Some(MAX_PAIRS)
    }

    fn solve(&self, matrix: &DistanceMatrix) -> Assignment {
        if !matrix.is_assignable() {
            debug!(
                "exhaustive: {} groups can't be served by {} cabs",
                matrix.rows(),
                matrix.columns()
            );
            return Assignment::none();
        }

        let pairs = matrix.rows() * matrix.columns();
        if pairs > MAX_PAIRS {
            warn!("exhaustive: {} pairs don't fit a subset mask", pairs);
            return Assignment::none();
        }
        if pairs > SLOW_PAIRS {
            warn!("exhaustive: searching 2^{} subsets, this may take a while", pairs);
        }

        let subsets = 1u64 << pairs;
        let best = if self.parallel {
            let chunks = (subsets + CHUNK_SIZE - 1) / CHUNK_SIZE;
            (0..chunks)
                .into_par_iter()
                .filter_map(|chunk| {
                    let start = chunk * CHUNK_SIZE;
                    search(matrix, start..(start + CHUNK_SIZE).min(subsets))
                })
                .reduce_with(earliest_minimum)
        } else {
            search(matrix, 0..subsets)
        };

        match best {
            Some((total, subset)) => {
                debug!("exhaustive: best subset {:#b} costs {}", subset, total);
                Assignment {
                    distance: Distance(total),
                    route: decode(subset, matrix.columns()),
                }
            }
            None => Assignment::none(),
        }
    }
}

fn earliest_minimum(a: (f64, u64), b: (f64, u64)) -> (f64, u64) {
    if b.0 < a.0 || (b.0 == a.0 && b.1 < a.1) {
        b
    } else {
        a
    }
}

/// Cheapest valid subset in `subsets`, the earliest one on ties.
fn search(matrix: &DistanceMatrix, subsets: Range<u64>) -> Option<(f64, u64)> {
    let mut best: Option<(f64, u64)> = None;
    for subset in subsets {
        if let Some(total) = evaluate(matrix, subset) {
            if best.map_or(true, |(b, _)| total < b) {
                best = Some((total, subset));
            }
        }
    }
    best
}

/// Route cost of `subset`, or `None` if it isn't a valid assignment.
fn evaluate(matrix: &DistanceMatrix, subset: u64) -> Option<f64> {
    let groups = matrix.rows();
    let cabs = matrix.columns();
    if subset.count_ones() as usize != groups {
        return None;
    }

    let mut group_taken = [false; MAX_PAIRS];
    let mut cab_taken = [false; MAX_PAIRS];
    let mut total = 0.0;
    let mut rest = subset;
    while rest != 0 {
        let bit = rest.trailing_zeros() as usize;
        rest &= rest - 1;
        let (group, cab) = (bit / cabs, bit % cabs);
        if group_taken[group] || cab_taken[cab] {
            return None;
        }
        group_taken[group] = true;
        cab_taken[cab] = true;
        total += matrix.at(group, cab);
    }
    Some(total)
}

fn decode(subset: u64, cabs: usize) -> Route {
    let mut route = vec![];
    let mut rest = subset;
    while rest != 0 {
        let bit = rest.trailing_zeros() as usize;
        rest &= rest - 1;
        route.push((bit / cabs, bit % cabs));
    }
    route
}
