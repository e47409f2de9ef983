mod answer;
mod prompt;
mod provider_config;

pub use answer::*;
pub use prompt::*;
pub use provider_config::*;
