mod app_state;
mod panels;
mod tabs;

pub use app_state::*;
pub use panels::*;
pub use tabs::*;
