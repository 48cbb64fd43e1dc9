mod autoscale_controller;
mod axis_controller;
mod coordinate_access;
mod heatmap;
mod plot;
mod plot_config;
mod plot_snapshot;
mod plottable;
mod render_coordinator;
mod render_frame_builder;
mod render_info;
mod render_style;
mod viewport_controller;

pub use heatmap::Heatmap;
pub use plot::Plot;
pub use plot_config::{AxisPanelSizes, PlotConfig};
pub use plot_snapshot::{
    AxisSnapshot, PLOT_SNAPSHOT_JSON_SCHEMA_V1, PlotSnapshot, PlotSnapshotJsonContractV1,
};
pub use plottable::{PlotRenderContext, Plottable};
pub use render_frame_builder::PlotLayout;
pub use render_info::RenderInfo;
pub use render_style::RenderStyle;
