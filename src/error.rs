use crate::character::Stage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("character creation is not open")]
    NotOpen,
    #[error("expected stage {expected:?}, wizard is at {actual:?}")]
    WrongStage { expected: Stage, actual: Stage },
    #[error("unknown race: {0}")]
    UnknownRace(String),
    #[error("unknown class: {0}")]
    UnknownClass(String),
    #[error("race and class must both be selected")]
    IncompleteSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    #[error("installation already in progress")]
    AlreadyInstalling,
    #[error("client is already installed")]
    AlreadyInstalled,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("allocated RAM must be between 1024 and 16384 MB in 512 MB steps, got {0}")]
    RamOutOfRange(u32),
    #[error("render distance must be between 2 and 32 chunks, got {0}")]
    RenderDistanceOutOfRange(u32),
    #[error("volume must be between 0 and 1, got {0}")]
    VolumeOutOfRange(f32),
    #[error("invalid resolution {0}x{1}")]
    InvalidResolution(u32, u32),
    #[error("Java path is empty")]
    EmptyJavaPath,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LauncherError {
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Install(#[from] InstallError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
