use thiserror::Error;

/// Errors surfaced by the simulation and scan layers.
#[derive(Debug, Error)]
pub enum Error {
    /// `rotate_around_axis` was asked to rotate a vector parallel to its axis,
    /// or around a zero-length axis.
    #[error("degenerate rotation axis: vector has no component perpendicular to the axis")]
    DegenerateRotationAxis,

    /// Configuration rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration text that is not valid TOML for `ScanConfig`.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
