mod mode;
mod theme;

pub use mode::EditorMode;
pub use theme::ThemeId;
