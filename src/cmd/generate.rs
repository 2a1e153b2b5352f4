use std::path::Path;

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    dto::{Point, ProblemDto},
    error::Result,
};

fn random_point(rng: &mut impl Rng, extent: u32) -> Point {
    let extent = extent as i64;
    Point::new(
        rng.gen_range(-extent..=extent) as f64,
        rng.gen_range(-extent..=extent) as f64,
    )
}

pub fn random_problem(rng: &mut impl Rng, commuters: usize, cabs: usize, extent: u32) -> ProblemDto {
    ProblemDto {
        commuters: (0..commuters).map(|_| random_point(rng, extent)).collect(),
        cabs: (0..cabs).map(|_| random_point(rng, extent)).collect(),
        destination: random_point(rng, extent),
    }
}

pub fn generate_command(
    path: &Path,
    commuters: usize,
    cabs: usize,
    seed: u64,
    extent: u32,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let problem = random_problem(&mut rng, commuters, cabs, extent);
    std::fs::write(path, problem.to_input_string())?;
    info!(
        "generate: {} commuters and {} cabs written to {}",
        commuters,
        cabs,
        path.display()
    );
    Ok(())
}
