mod exhaustive;
mod hungarian;

use dyn_clone::DynClone;
use serde::{Deserialize, Serialize};

use crate::{
    dto::{Cab, Point},
    error::Error,
    geometry::distance,
};

pub use self::exhaustive::Exhaustive;
pub use self::hungarian::Hungarian;

/// Total travel distance. Negative values never come out of the geometry,
/// so `-1` is free to mean "no route".
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const NO_ROUTE: Distance = Distance(-1.0);

    pub fn is_no_route(&self) -> bool {
        self.0 < 0.0
    }
}

/// `(group_index, cab_index)` pairs.
pub type Route = Vec<(usize, usize)>;

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub distance: Distance,
    pub route: Route,
}

impl Assignment {
    pub fn none() -> Self {
        Assignment {
            distance: Distance::NO_ROUTE,
            route: vec![],
        }
    }
}

/// Group-to-cab distances, indexed `[group][cab]`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DistanceMatrix {
    entries: Vec<Vec<f64>>,
    columns: usize,
}

impl DistanceMatrix {
    pub fn new(groups: &[Point], cabs: &[Cab]) -> Self {
        DistanceMatrix {
            entries: groups
                .iter()
                .map(|group| cabs.iter().map(|cab| distance(group, cab)).collect())
                .collect(),
            columns: cabs.len(),
        }
    }

    #[cfg(test)]
    pub fn from_rows(entries: Vec<Vec<f64>>) -> Self {
        let columns = entries.first().map_or(0, |r| r.len());
        assert!(entries.iter().all(|r| r.len() == columns));
        DistanceMatrix { entries, columns }
    }

    pub fn rows(&self) -> usize {
        self.entries.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn at(&self, group: usize, cab: usize) -> f64 {
        self.entries[group][cab]
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.columns == 0
    }

    /// Whether every group can get a cab of its own.
    pub fn is_assignable(&self) -> bool {
        !self.is_empty() && self.rows() <= self.columns
    }
}

/// Picks a cab for every group so that the summed pickup distance is minimal.
pub trait AssignmentSolver: DynClone + Sync + Send {
    fn name(&self) -> String;

    /// `Assignment::none()` when no group-to-cab assignment exists.
    fn solve(&self, matrix: &DistanceMatrix) -> Assignment;

    /// Largest `groups * cabs` the solver can handle, if bounded.
    fn max_pairs(&self) -> Option<usize> {
        None
    }
}

dyn_clone::clone_trait_object!(AssignmentSolver);

pub const SOLVERS: &[&str] = &["exhaustive", "hungarian"];

pub fn create_solver(solver_name: &str, parallel: bool) -> Result<Box<dyn AssignmentSolver>, Error> {
    match solver_name {
        "exhaustive" => Ok(Box::new(Exhaustive::new(parallel))),
        "hungarian" => Ok(Box::<Hungarian>::default()),
        n => Err(Error::UnknownSolver(n.to_string())),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::DistanceMatrix;

    /// Minimum over every injective group-to-cab mapping, by recursion.
    pub fn permutation_minimum(matrix: &DistanceMatrix) -> Option<f64> {
        fn go(matrix: &DistanceMatrix, group: usize, used: &mut Vec<bool>) -> Option<f64> {
            if group == matrix.rows() {
                return Some(0.0);
            }
            let mut best: Option<f64> = None;
            for cab in 0..matrix.columns() {
                if used[cab] {
                    continue;
                }
                used[cab] = true;
                if let Some(rest) = go(matrix, group + 1, used) {
                    let total = matrix.at(group, cab) + rest;
                    if best.map_or(true, |b| total < b) {
                        best = Some(total);
                    }
                }
                used[cab] = false;
            }
            best
        }

        if !matrix.is_assignable() {
            return None;
        }
        go(matrix, 0, &mut vec![false; matrix.columns()])
    }

    pub fn random_matrix(rng: &mut impl rand::Rng, rows: usize, columns: usize) -> DistanceMatrix {
        DistanceMatrix::from_rows(
            (0..rows)
                .map(|_| (0..columns).map(|_| rng.gen_range(0..50) as f64).collect())
                .collect(),
        )
    }
}
