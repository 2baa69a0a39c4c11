// src/main.rs

use depqueue::{cli, logging, run};

fn main() {
    let result = run_main();

    if let Err(err) = &result {
        eprintln!("depqueue error: {err:?}");
    }

    // Reported on every path, success or failure.
    println!("Done.");

    if result.is_err() {
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}
