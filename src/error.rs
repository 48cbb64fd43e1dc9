use thiserror::Error;

use crate::core::AxisId;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("plot does not contain any {0} axes")]
    MissingAxis(&'static str),

    #[error("axis {0:?} is not owned by this plot")]
    UnknownAxis(AxisId),
}
