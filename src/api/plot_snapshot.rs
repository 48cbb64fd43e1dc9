use serde::{Deserialize, Serialize};

use crate::core::{AxisId, Edge, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::{Plot, RenderInfo};

pub const PLOT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of one axis. `limits` is `None` while the range is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub id: AxisId,
    pub edge: Edge,
    pub visible: bool,
    pub label: String,
    pub limits: Option<(f64, f64)>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub viewport: Viewport,
    pub render_info: RenderInfo,
    pub axes: Vec<AxisSnapshot>,
    pub plottable_count: usize,
    pub interaction_mode: InteractionMode,
    pub zoom_rectangle_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PlotSnapshot,
}

impl PlotSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = PlotSnapshotJsonContractV1 {
            schema_version: PLOT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PlotSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PlotSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != PLOT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> Plot<R> {
    #[must_use]
    pub fn snapshot(&self) -> PlotSnapshot {
        PlotSnapshot {
            viewport: self.config.viewport,
            render_info: self.render_info,
            axes: self
                .axes
                .iter()
                .map(|axis| AxisSnapshot {
                    id: axis.id(),
                    edge: axis.edge(),
                    visible: axis.is_visible(),
                    label: axis.label().to_owned(),
                    limits: axis
                        .range()
                        .is_set()
                        .then(|| (axis.min(), axis.max())),
                })
                .collect(),
            plottable_count: self.plottables.len(),
            interaction_mode: self.interaction.mode(),
            zoom_rectangle_visible: self.interaction.zoom_rectangle().is_visible(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> PlotResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
