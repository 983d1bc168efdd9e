use thiserror::Error;

/// Errors raised while turning level text or cell lists into a [`Grid`](crate::Grid).
///
/// All of these are fatal to the load: the caller must not build a world from a
/// partially parsed level.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("unknown cell tag `{tag}` in token `{token}`")]
    UnknownCellTag { tag: String, token: String },
    #[error("unknown tile kind `{kind}` in token `{token}`")]
    UnknownTileKind { kind: String, token: String },
    #[error("tile token `{token}` has no collision kind")]
    MissingTileKind { token: String },
    #[error("malformed integer `{value}` in token `{token}`")]
    BadInteger { value: String, token: String },
    #[error("two cells occupy column {column}, row {row}")]
    DuplicateCell { column: i32, row: i32 },
    #[error("level has no player spawn")]
    MissingSpawn,
    #[error("cell size must be positive, got {0}")]
    BadCellSize(i32),
}

/// Errors raised when validating tuning or simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tuning field `{field}` must be finite and non-negative, got {value}")]
    NegativeOrNan { field: &'static str, value: f32 },
    #[error("friction {0} must be within [0, 1)")]
    Friction(f32),
    #[error("max jumps {0} exceeds the supported limit of {limit}", limit = crate::components::motion::MAX_JUMP_LIMIT)]
    TooManyJumps(u32),
    #[error("jump impulse {impulse} must exceed gravity {gravity}")]
    WeakJump { impulse: f32, gravity: f32 },
    #[error("config field `{field}` must be positive")]
    NonPositive { field: &'static str },
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can stop a level from starting.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
