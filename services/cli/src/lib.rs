mod cli;
mod render;
mod writers;

use survey_insights::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
