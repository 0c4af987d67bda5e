use bevy::{prelude::{App, PluginGroup, Startup, Update, default}, DefaultPlugins, window::{WindowPlugin, Window, WindowResolution, PresentMode}, log::{LogPlugin, Level}, diagnostic::FrameTimeDiagnosticsPlugin};
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};
use level::{spawn_level, spawn_player, respawn_player};
use settings::SettingsPlugin;
use sr_common::CommonPlugin;
use sr_core::CorePlugin;
use sr_movement::MovementPlugin;
use sr_util::constants::{WINDOW_TITLE, INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT};

pub mod level;
pub mod settings;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
              title: WINDOW_TITLE.to_string(),
              resizable: true,
              resolution: WindowResolution::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
              present_mode: PresentMode::AutoVsync,
              ..default()
            }),
            ..default()
        }).set(LogPlugin {
            level: Level::INFO,
            filter: "wgpu=error,naga=warn,sr_movement=debug".to_string(),
        }))
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(FramepacePlugin)
        .add_plugins(SettingsPlugin {})
        .add_plugins(CommonPlugin {})
        .add_plugins(CorePlugin {})
        .add_plugins(MovementPlugin {})
        .insert_resource(FramepaceSettings {
            limiter: Limiter::from_framerate(60.0)
        });

    app
        .add_systems(Startup, (spawn_level, spawn_player))
        .add_systems(Update, respawn_player);

    app.run();
}
