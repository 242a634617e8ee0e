use crate::config::{GAME_JAR, GameSettings};
use crate::install::InstallState;

/// What the primary button on the home view does right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    Busy,
    Install,
    CreateCharacter,
    Launch,
}

impl PlayAction {
    pub fn resolve(install: &InstallState, has_character: bool) -> Self {
        match install {
            InstallState::Installing { .. } => PlayAction::Busy,
            InstallState::NotInstalled => PlayAction::Install,
            InstallState::Installed if !has_character => PlayAction::CreateCharacter,
            InstallState::Installed => PlayAction::Launch,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayAction::Busy => "⟳ Installing...",
            PlayAction::Install => "⬇ Install Axis",
            PlayAction::CreateCharacter => "➕ Create character",
            PlayAction::Launch => "▶ Launch game",
        }
    }

    pub fn is_enabled(self) -> bool {
        self != PlayAction::Busy
    }
}

pub fn launch_command(settings: &GameSettings) -> String {
    let mut command = format!(
        "{} -Xmx{}M -jar {} --width {} --height {}",
        settings.java_path.trim(),
        settings.allocated_ram_mb,
        GAME_JAR,
        settings.resolution_width,
        settings.resolution_height
    );
    if settings.fullscreen {
        command.push_str(" --fullscreen");
    }
    command
}
