use thiserror::Error;

use crate::backend::signal::SignalModelBuildError;

use explorer::OutputError;
use input::InputError;
use renderer::RenderError;


pub mod cli;
pub mod config;
pub mod explorer;
pub mod input;
pub mod mode;
pub mod notation;
pub mod renderer;
pub mod report;


#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
    #[error("Invalid signal model: {0}")]
    Model(#[from] SignalModelBuildError),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("Output failed: {0}")]
    Output(#[from] OutputError),
    #[error("Failed to write to stdout: {0}")]
    Io(#[from] std::io::Error),
}
