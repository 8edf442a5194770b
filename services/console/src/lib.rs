mod cli;
mod demo;
mod infra;
mod session;

use disaster_waste::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
