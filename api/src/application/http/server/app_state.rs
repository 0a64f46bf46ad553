use std::sync::Arc;

use chefgenie_core::application::ChefGenieService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<ChefGenieService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ChefGenieService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
