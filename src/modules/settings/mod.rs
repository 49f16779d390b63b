/// User settings module
///
/// Holds the persisted theme preference. Tiny on purpose: the only setting
/// the board owns is the dark/light choice.
pub mod theme;
pub mod theme_store;

pub use theme::Theme;
pub use theme_store::ThemeStore;
