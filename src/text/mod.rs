pub mod decor;
pub mod fonts;
pub mod overlay;
