use std::io::{self, Write};

use log::info;

use crate::{
    cmd::Args,
    dto::Point,
    error::Result,
    planner::{plan, Plan, Problem},
    solvers::create_solver,
};

pub fn default_command(args: &Args) -> Result<()> {
    let solver = create_solver(&args.solver, args.parallel)?;
    let problem = Problem::load(&args.input)?;

    let plan = plan(&problem, &args.clustering_config(), solver.as_ref())?;

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &plan)?;

    if let Some(path) = &args.output {
        plan.save(path)?;
        info!("solution for {} written to {}", problem.id, path.display());
    }
    Ok(())
}

fn format_points(points: &[Point]) -> String {
    let points: Vec<String> = points.iter().map(Point::to_string).collect();
    format!("[{}]", points.join(", "))
}

pub fn write_report(out: &mut impl Write, plan: &Plan) -> io::Result<()> {
    if plan.distance.is_no_route() {
        return writeln!(out, "Sorry, no optimal route could be found :(");
    }

    writeln!(out, "Optimal route taken:")?;
    for (i, &(group, cab)) in plan.route.iter().enumerate() {
        writeln!(
            out,
            "    {}. Group {} was picked up by Cab {}.",
            i + 1,
            format_points(plan.clusters[group].points()),
            plan.cabs[cab]
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Optimal total distance travelled by all the cabs: {:.6}",
        plan.distance.0
    )
}
