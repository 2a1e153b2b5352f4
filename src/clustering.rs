use derivative::Derivative;
use log::{debug, info, warn};
use nalgebra::Vector2;
use thiserror::Error as ThisError;

use crate::{
    dto::{Cab, Commuter, Point},
    geometry::{distance, Coords2D},
};

#[derive(Debug, ThisError, PartialEq)]
pub enum ClusteringError {
    #[error("Can't create a cluster without points")]
    EmptyCluster,
    #[error("Clustering lost every group while commuters were left to assign")]
    NoClusters,
    #[error("Convergence cutoff must be a positive number, got {0}")]
    InvalidCutoff(f64),
}

#[derive(Derivative, Debug, Clone, Copy, PartialEq)]
#[derivative(Default)]
pub struct ClusteringConfig {
    /// Refinement stops once no centroid moves by this much or more.
    #[derivative(Default(value = "0.5"))]
    pub cutoff: f64,
    #[derivative(Default(value = "10_000"))]
    pub max_iterations: usize,
}

impl ClusteringConfig {
    pub fn validate(&self) -> Result<(), ClusteringError> {
        if self.cutoff.is_finite() && self.cutoff > 0.0 {
            Ok(())
        } else {
            Err(ClusteringError::InvalidCutoff(self.cutoff))
        }
    }
}

/// A non-empty group of points and their centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    points: Vec<Point>,
    centroid: Point,
}

impl Cluster {
    pub fn new(points: Vec<Point>) -> Result<Self, ClusteringError> {
        if points.is_empty() {
            return Err(ClusteringError::EmptyCluster);
        }
        let sum = points
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.as_vec());
        let centroid = Point::from(sum / points.len() as f64);
        Ok(Cluster { points, centroid })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }
}

/// Result of a single refinement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement {
    pub clusters: Vec<Cluster>,
    pub max_shift: f64,
}

/// Reassigns every point to its nearest centroid and rebuilds the clusters
/// from the new memberships. Clusters left without points are dropped.
pub fn refine(clusters: &[Cluster], points: &[Point]) -> Result<Refinement, ClusteringError> {
    let mut members: Vec<Vec<Point>> = vec![vec![]; clusters.len()];

    for p in points {
        let mut nearest: Option<(usize, f64)> = None;
        for (i, cluster) in clusters.iter().enumerate() {
            let d = distance(p, &cluster.centroid);
            if nearest.map_or(true, |(_, best)| d < best) {
                nearest = Some((i, d));
            }
        }
        if let Some((i, _)) = nearest {
            members[i].push(*p);
        }
    }

    let mut max_shift = 0.0f64;
    let mut refined = Vec::with_capacity(clusters.len());
    for (old, assigned) in clusters.iter().zip(members) {
        if assigned.is_empty() {
            continue;
        }
        let cluster = Cluster::new(assigned)?;
        max_shift = max_shift.max(distance(&old.centroid, &cluster.centroid));
        refined.push(cluster);
    }

    Ok(Refinement {
        clusters: refined,
        max_shift,
    })
}

/// Groups commuters around the cab locations, one seed cluster per cab.
///
/// The number of groups can only shrink: a cluster that attracts no commuter
/// in some pass is gone for good.
pub fn cluster_commuters(
    commuters: &[Commuter],
    cabs: &[Cab],
    config: &ClusteringConfig,
) -> Result<Vec<Cluster>, ClusteringError> {
    config.validate()?;

    if commuters.is_empty() || cabs.is_empty() {
        warn!(
            "clustering: nothing to group ({} commuters, {} cabs)",
            commuters.len(),
            cabs.len()
        );
        return Ok(vec![]);
    }

    let mut clusters = cabs
        .iter()
        .map(|cab| Cluster::new(vec![*cab]))
        .collect::<Result<Vec<_>, _>>()?;

    let mut iteration = 0;
    loop {
        iteration += 1;
        let refinement = refine(&clusters, commuters)?;
        if refinement.clusters.is_empty() {
            return Err(ClusteringError::NoClusters);
        }
        if refinement.clusters.len() < clusters.len() {
            debug!(
                "clustering: iteration {} dropped {} empty clusters",
                iteration,
                clusters.len() - refinement.clusters.len()
            );
        }
        debug!(
            "clustering: iteration {}, {} clusters, max shift {}",
            iteration,
            refinement.clusters.len(),
            refinement.max_shift
        );
        clusters = refinement.clusters;

        if refinement.max_shift < config.cutoff {
            info!(
                "clustering: converged after {} iterations into {} groups",
                iteration,
                clusters.len()
            );
            return Ok(clusters);
        }
        if iteration >= config.max_iterations {
            warn!(
                "clustering: stopped after {} iterations without converging (last shift {})",
                iteration, refinement.max_shift
            );
            return Ok(clusters);
        }
    }
}
