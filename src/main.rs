use std::io;
use std::process::ExitCode;

use iconforge::{batch, logger, IconConfig};

fn main() -> ExitCode {
    logger::init();
    let cfg = IconConfig::default();
    let stdout = io::stdout();
    match batch::run(&cfg, &mut stdout.lock()) {
        Ok(written) => {
            log::info!("{} icons written to {}", written.len(), cfg.output_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
