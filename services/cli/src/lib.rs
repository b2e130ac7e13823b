mod cli;
mod demo;
mod infra;

use readiness_scout::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
