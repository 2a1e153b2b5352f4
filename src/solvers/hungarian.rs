//! Kuhn-Munkres assignment, polynomial in the number of groups and cabs.

use log::debug;
use pathfinding::kuhn_munkres::{kuhn_munkres_min, Weights};

use super::{Assignment, AssignmentSolver, DistanceMatrix};
use crate::scorer::route_distance;

/// Six decimal places survive the conversion to integer weights.
const SCALE: f64 = 1_000_000.0;

struct ScaledWeights(Vec<Vec<i64>>);

impl ScaledWeights {
    fn new(matrix: &DistanceMatrix) -> Self {
        ScaledWeights(
            (0..matrix.rows())
                .map(|g| {
                    (0..matrix.columns())
                        .map(|c| Self::to_weight(matrix.at(g, c)))
                        .collect()
                })
                .collect(),
        )
    }

    fn to_weight(distance: f64) -> i64 {
        let w = (distance * SCALE).round();
        // keep clear of the edges, the solver negates and sums weights
        let limit = (i64::MAX / 1024) as f64;
        w.clamp(-limit, limit) as i64
    }
}

impl Weights<i64> for ScaledWeights {
    fn rows(&self) -> usize {
        self.0.len()
    }

    fn columns(&self) -> usize {
        self.0.first().map_or(0, |r| r.len())
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.0[row][col]
    }

    fn neg(&self) -> Self {
        ScaledWeights(
            self.0
                .iter()
                .map(|r| r.iter().map(|&x| x.saturating_neg()).collect())
                .collect(),
        )
    }
}

#[derive(Default, Clone, Debug)]
pub struct Hungarian;

impl AssignmentSolver for Hungarian {
    fn name(&self) -> String {
        "hungarian".to_owned()
    }

    fn solve(&self, matrix: &DistanceMatrix) -> Assignment {
        if !matrix.is_assignable() {
            debug!(
                "hungarian: {} groups can't be served by {} cabs",
                matrix.rows(),
                matrix.columns()
            );
            return Assignment::none();
        }

        let (_, cabs): (i64, _) = kuhn_munkres_min(&ScaledWeights::new(matrix));
        let route: Vec<_> = cabs.into_iter().enumerate().collect();

        Assignment {
            distance: route_distance(matrix, &route),
            route,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::solvers::{
        test_support::{permutation_minimum, random_matrix},
        Distance, Exhaustive,
    };

    #[test]
    fn test_square() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![4.0, 1.0, 3.0],
            vec![2.0, 0.0, 5.0],
            vec![3.0, 2.0, 2.0],
        ]);
        let assignment = Hungarian.solve(&matrix);
        assert_eq!(assignment.distance, Distance(5.0));
        assert_eq!(assignment.route, vec![(0, 1), (1, 0), (2, 2)]);
    }

    #[test]
    fn test_more_cabs_than_groups() {
        let matrix = DistanceMatrix::from_rows(vec![vec![8.0, 3.5, 9.0, 1.25]]);
        let assignment = Hungarian.solve(&matrix);
        assert_eq!(assignment.distance, Distance(1.25));
        assert_eq!(assignment.route, vec![(0, 3)]);
    }

    #[test]
    fn test_unassignable() {
        let matrix = DistanceMatrix::from_rows(vec![vec![1.0], vec![1.0]]);
        assert_eq!(Hungarian.solve(&matrix), Assignment::none());
        assert_eq!(Hungarian.solve(&DistanceMatrix::default()), Assignment::none());
    }

    #[test]
    fn test_agrees_with_exhaustive() {
        let mut rng = StdRng::seed_from_u64(42);
        for (rows, columns) in [(1, 3), (2, 2), (2, 4), (3, 3), (3, 5), (4, 4)] {
            for _ in 0..5 {
                let matrix = random_matrix(&mut rng, rows, columns);
                let hungarian = Hungarian.solve(&matrix);
                let exhaustive = Exhaustive::default().solve(&matrix);
                assert_eq!(hungarian.distance, exhaustive.distance);
                assert_eq!(Some(hungarian.distance.0), permutation_minimum(&matrix));
            }
        }
    }
}
