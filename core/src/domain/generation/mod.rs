pub mod entities;
pub mod helpers;
pub mod services;

pub use entities::*;
pub use services::GenerationOrchestrator;
