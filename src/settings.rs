use crate::config::{
    GameSettings, RAM_RANGE_MB, RAM_STEP_MB, RENDER_DISTANCE_RANGE, SETTINGS_SAVE_DELAY,
    VOLUME_RANGE,
};
use crate::error::SettingsError;
use std::time::Instant;
use sysinfo::System;

pub fn validate(settings: &GameSettings) -> Result<(), SettingsError> {
    if !RAM_RANGE_MB.contains(&settings.allocated_ram_mb) || settings.allocated_ram_mb % RAM_STEP_MB != 0 {
        return Err(SettingsError::RamOutOfRange(settings.allocated_ram_mb));
    }
    if !RENDER_DISTANCE_RANGE.contains(&settings.render_distance) {
        return Err(SettingsError::RenderDistanceOutOfRange(settings.render_distance));
    }
    if !VOLUME_RANGE.contains(&settings.master_volume) {
        return Err(SettingsError::VolumeOutOfRange(settings.master_volume));
    }
    if settings.resolution_width == 0 || settings.resolution_height == 0 {
        return Err(SettingsError::InvalidResolution(
            settings.resolution_width,
            settings.resolution_height,
        ));
    }
    if settings.java_path.trim().is_empty() {
        return Err(SettingsError::EmptyJavaPath);
    }
    Ok(())
}

/// Applied settings plus the draft being edited in the settings view.
pub struct SettingsPanel {
    applied: GameSettings,
    pub draft: GameSettings,
    /// Deadline and the snapshot that passed validation when the save began.
    saving: Option<(Instant, GameSettings)>,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self {
            applied: GameSettings::default(),
            draft: GameSettings::default(),
            saving: None,
        }
    }
}

impl SettingsPanel {
    pub fn applied(&self) -> &GameSettings {
        &self.applied
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.saving.as_ref().map(|(until, _)| *until)
    }

    pub fn begin_save(&mut self, now: Instant) -> Result<(), SettingsError> {
        validate(&self.draft)?;
        self.saving = Some((now + SETTINGS_SAVE_DELAY, self.draft.clone()));
        Ok(())
    }

    /// Commits the snapshot taken by `begin_save` once the save delay has
    /// passed. Draft edits made in between are not part of it.
    pub fn poll(&mut self, now: Instant) -> Option<&GameSettings> {
        match &self.saving {
            Some((until, _)) if now >= *until => {}
            _ => return None,
        }
        let (_, snapshot) = self.saving.take()?;
        self.applied = snapshot;
        match serde_json::to_string(&self.applied) {
            Ok(json) => tracing::info!(settings = %json, "settings saved"),
            Err(e) => tracing::warn!("settings saved, failed to serialize for log: {e}"),
        }
        Some(&self.applied)
    }

    pub fn reset(&mut self) {
        self.draft = GameSettings::default();
    }
}

/// Host facts shown under the advanced settings.
pub fn system_info() -> serde_json::Value {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.refresh_cpu();
    host_summary(sys.total_memory(), sys.cpus().len())
}

fn host_summary(total_memory_bytes: u64, cpu_cores: usize) -> serde_json::Value {
    serde_json::json!({
        "os": std::env::consts::OS,
        "cpu_cores": cpu_cores,
        "total_memory_mb": total_memory_bytes / 1024 / 1024,
    })
}
