//! Command-line maze generator and solver.
//!
//! Run: cargo run -- --width 21 --height 11
//!
//! Logging is off unless `LABYRINTH_LOG` is set (e.g. `LABYRINTH_LOG=debug`).

use std::io;

use labyrinth::{CliError, Options, config};

fn main() {
    let env = env_logger::Env::new()
        .filter("LABYRINTH_LOG")
        .write_style("LABYRINTH_LOG_STYLE");
    env_logger::init_from_env(env);

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), CliError> {
    let matches = config::command().get_matches();
    let options = Options::from_matches(&matches);
    log::debug!("options: {options:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let config = options.resolve(&mut stdin.lock(), &mut stdout.lock())?;

    labyrinth::run(&config, &mut stdout.lock())?;
    Ok(())
}
