pub mod brush;
pub mod canvas;
pub mod layers;
pub mod palette;
pub mod stream;
