mod openai_compatible_client;

pub use openai_compatible_client::*;
