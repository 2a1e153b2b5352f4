use crate::{
    dto::{Destination, Point},
    geometry::distance,
    solvers::{Distance, DistanceMatrix},
};

/// Sum of the matrix entries picked by `route`.
pub fn route_distance(matrix: &DistanceMatrix, route: &[(usize, usize)]) -> Distance {
    Distance(route.iter().map(|&(g, c)| matrix.at(g, c)).sum())
}

/// Adds the trip from every group to the destination. Without a route there
/// is nothing to add to, so the sentinel is passed through.
pub fn add_destination_distance(
    optimal: Distance,
    groups: &[Point],
    destination: &Destination,
) -> Distance {
    if optimal.is_no_route() {
        return optimal;
    }

    let to_destination: f64 = groups.iter().map(|g| distance(g, destination)).sum();
    Distance(optimal.0 + to_destination)
}
