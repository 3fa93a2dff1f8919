#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{LayoutConfig, load_config};
pub use ir::{Connection, Node, NodeId, Workflow};
pub use layout::{DagLayout, Layout, LayoutError, NODE_WIDTH, NodePlacement, compute_layout};
