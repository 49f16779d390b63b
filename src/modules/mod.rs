pub mod jobs;
pub mod settings;
