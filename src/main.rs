mod common;
mod config;
mod piece;
mod queue;
mod session;

use std::io;

use chrono::Utc;
use env_logger::Env;

use crate::config::{Config, ConfigError};
use crate::piece::generator::PieceGenerator;
use crate::session::Session;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Error loading configuration")]
    Config(#[from] ConfigError),
    #[error("Error talking to the terminal")]
    Io(#[from] io::Error),
}

fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_millis()) as u64
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::load()?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("Piece generator seeded with {}", seed);

    let mut session = Session::new(PieceGenerator::from_seed(seed));
    session.fill(config.initial_pieces);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
