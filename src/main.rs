use clap::Parser;

use git_semver::cli::{orchestration, Cli};
use git_semver::{logging, ui};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let lines = match orchestration::run(&cli) {
        Ok(lines) => lines,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = ui::display_lines(&lines) {
        ui::display_error(&format!("Failed to write output: {}", e));
        std::process::exit(1);
    }
}
