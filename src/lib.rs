#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod ir;
pub mod layout;
pub mod layout_dump;

pub use config::{CenterScale, LayoutConfig, OriginPlacement, load_config};
pub use error::LayoutError;
pub use interpolate::interpolate;
pub use ir::{NodeDescriptor, NodeKind, Scene, SortMode};
pub use layout::{
    LayoutOptions, PositionEntry, PositionMap, compute_layout, compute_scene_layout,
};

#[cfg(feature = "cli")]
pub use cli::run;
