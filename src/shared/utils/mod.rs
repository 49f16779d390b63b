pub mod currency;
pub mod logger;

pub use currency::format_rupiah;
pub use logger::init_logger;
