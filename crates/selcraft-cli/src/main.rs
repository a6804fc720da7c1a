mod cli;
mod commands;
mod error;
mod logging;

use cli::{BuildParams, RenderParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("build", m)) => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into())
        }
        Some(("render", m)) => {
            let params = RenderParams::from_matches(m);
            commands::render::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
