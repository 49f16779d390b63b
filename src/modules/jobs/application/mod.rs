pub mod service;

pub use service::{JobBoardService, LoadOutcome, LOAD_FAILED_MESSAGE};
