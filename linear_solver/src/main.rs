use std::process;

use env_logger::Env;
use linear_solver::cli::Args;

fn main() {
    let args = Args::parse_normalized(std::env::args_os());
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = args.into_params().run() {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}
