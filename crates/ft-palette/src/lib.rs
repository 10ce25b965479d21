pub mod error;
pub mod palette;
pub mod theme;

pub use error::{PaletteError, Result};
pub use palette::{Palette, PaletteColor};
pub use theme::{ThemeDefinition, inverse_theme, standard_theme};
