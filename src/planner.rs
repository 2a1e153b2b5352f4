use std::{fs::File, io::BufWriter, path::Path};

use log::info;

use crate::{
    clustering::{cluster_commuters, Cluster, ClusteringConfig},
    dto::{Cab, GroupDto, PickupDto, Point, ProblemDto, SolutionDto},
    error::{Error, Result},
    helpers::os_str_to_str,
    scorer::add_destination_distance,
    solvers::{AssignmentSolver, Distance, DistanceMatrix, Route},
};

#[derive(Default, Clone)]
pub struct Problem {
    pub id: String,
    pub data: ProblemDto,
}

impl Problem {
    pub fn load(problem_path: &Path) -> Result<Self> {
        Ok(Problem {
            id: os_str_to_str(problem_path.file_stem()),
            data: ProblemDto::load(problem_path)?,
        })
    }
}

/// Everything needed to report a solved problem.
#[derive(Debug, Clone)]
pub struct Plan {
    pub solver_name: String,
    /// Pickup legs plus the legs to the destination, or the no-route sentinel.
    pub distance: Distance,
    pub route: Route,
    pub clusters: Vec<Cluster>,
    pub cabs: Vec<Cab>,
}

impl Plan {
    pub fn to_dto(&self) -> SolutionDto {
        SolutionDto {
            solver_name: self.solver_name.clone(),
            total_distance: (!self.distance.is_no_route()).then_some(self.distance.0),
            route: self
                .route
                .iter()
                .map(|&(group, cab)| PickupDto {
                    group,
                    cab,
                    cab_location: self.cabs[cab],
                })
                .collect(),
            groups: self
                .clusters
                .iter()
                .map(|c| GroupDto {
                    centroid: c.centroid(),
                    points: c.points().to_vec(),
                })
                .collect(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.to_dto())?;
        Ok(())
    }
}

/// Clusters the commuters, assigns cabs to the groups and adds the trip to
/// the destination.
pub fn plan(
    problem: &Problem,
    config: &ClusteringConfig,
    solver: &dyn AssignmentSolver,
) -> Result<Plan> {
    let data = &problem.data;
    info!(
        "plan({}): {} commuters, {} cabs",
        problem.id,
        data.commuters.len(),
        data.cabs.len()
    );

    let clusters = cluster_commuters(&data.commuters, &data.cabs, config)?;
    let groups: Vec<Point> = clusters.iter().map(Cluster::centroid).collect();
    let matrix = DistanceMatrix::new(&groups, &data.cabs);

    let pairs = matrix.rows() * matrix.columns();
    if let Some(max) = solver.max_pairs() {
        if pairs > max {
            return Err(Error::SearchSpaceTooLarge {
                solver: solver.name(),
                pairs,
                max,
            });
        }
    }

    info!(
        "plan({}): assigning {} groups using {}",
        problem.id,
        groups.len(),
        solver.name()
    );
    let assignment = solver.solve(&matrix);
    let distance = add_destination_distance(assignment.distance, &groups, &data.destination);
    if distance.is_no_route() {
        info!("plan({}): no valid assignment", problem.id);
    } else {
        info!("plan({}): total distance {}", problem.id, distance.0);
    }

    Ok(Plan {
        solver_name: solver.name(),
        distance,
        route: assignment.route,
        clusters,
        cabs: data.cabs.clone(),
    })
}
