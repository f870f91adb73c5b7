pub mod axis;
pub mod color;
pub mod data;
pub mod plot_configs;
pub mod primitives;

pub use axis::*;
pub use color::*;
pub use data::*;
pub use plot_configs::*;
pub use primitives::*;
