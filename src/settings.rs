use std::path::{Path, PathBuf};

use bevy::{prelude::{Plugin, App, Update, Res, ResMut, Input, KeyCode}, log::{info, warn}};
use bevy_persistent::{Persistent, StorageFormat};
use sr_common::settings::ControllerSettings;
use sr_util::constants::{SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};

pub const SAVE_SETTINGS_KEY: KeyCode = KeyCode::F5;

/// Loads `ControllerSettings` from disk before the rest of the game reads them.
#[derive(Debug, Default)]
pub struct SettingsPlugin {}

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let path = settings_path();

        let persistent = Persistent::<ControllerSettings>::builder()
            .name("controller settings")
            .format(StorageFormat::Json)
            .path(path.clone())
            .default(ControllerSettings::default())
            .build();

        match persistent {
            Ok(persistent) => {
                let (settings, error) = (*persistent).clone().or_default();
                match error {
                    Some(error) => warn!("ignoring {}: {}", path.display(), error),
                    None => info!("loaded settings from {}", path.display()),
                }

                app
                    .insert_resource(settings)
                    .insert_resource(persistent)
                    .add_systems(Update, save_settings);
            }
            Err(error) => {
                warn!("could not load {}, using defaults: {}", path.display(), error);
                app.insert_resource(ControllerSettings::default());
            }
        }
    }
}

pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|native_config_dir| native_config_dir.join(SETTINGS_DIR_NAME))
        .unwrap_or(Path::new("local").join("configuration"))
        .join(SETTINGS_FILE_NAME)
}

fn save_settings(
    keyboard_input: Res<Input<KeyCode>>,
    settings: Res<ControllerSettings>,
    mut persistent: ResMut<Persistent<ControllerSettings>>,
) {
    if !keyboard_input.just_pressed(SAVE_SETTINGS_KEY) {
        return;
    }

    match persistent.set(settings.clone()) {
        Ok(()) => info!("settings saved"),
        Err(error) => warn!("could not save settings: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_live_in_a_json_file() {
        let path = settings_path();
        assert_eq!(path.file_name().and_then(|name| name.to_str()), Some(SETTINGS_FILE_NAME));
        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    }
}
