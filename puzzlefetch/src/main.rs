use puzzlefetch::commands::command_argument_builder;
use puzzlefetch::handlers::handle_run;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so print mode's stdout stays machine-clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut cmd = command_argument_builder();

    // Bare invocation prints usage and exits 1. Callers script against that
    // code, so don't let clap handle it (its missing-argument error exits 2).
    if std::env::args().len() <= 1 {
        eprintln!("{}", cmd.render_usage());
        std::process::exit(1);
    }

    let matches = cmd.get_matches();
    let logfile = matches
        .get_one::<PathBuf>("LOGFILE")
        .expect("LOGFILE is required");
    let todir = matches.get_one::<PathBuf>("todir");

    if let Err(e) = handle_run(logfile, todir.map(PathBuf::as_path)) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}
