//! Benchmark figure rendering for the B+ tree performance suite.
//!
//! The benchmark harness leaves one timing file per operation (a plain
//! duration on each line). Each pipeline pairs three of those files with
//! the parameter sweep that produced them, draws insert, search and delete
//! as vertically stacked panels, exports the figure as SVG and can then
//! open an interactive viewer on the same data.

pub mod app;
pub mod color;
pub mod data;
pub mod export;
pub mod pipeline;
pub mod ui;

pub use data::loader::{load_series, LoadError};
pub use data::model::{Figure, Operation, Panel, ShapeError, Sweep, Y_LABEL};
pub use pipeline::Pipeline;
