use clap::Parser;
use cmd::default::*;
use cmd::generate::*;
use cmd::Args;
use cmd::Commands;
use log::debug;

mod clustering;
mod cmd;
mod dto;
mod error;
mod geometry;
mod helpers;
mod planner;
mod scorer;
mod solvers;

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match &args.command {
        Some(Commands::Generate {
            commuters,
            cabs,
            seed,
            extent,
            path,
        }) => generate_command(path, *commuters, *cabs, *seed, *extent),
        None => default_command(&args),
    };

    if let Err(e) = result {
        debug!("{:?}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }
}
