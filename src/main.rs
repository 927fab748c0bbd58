use avian3d::prelude::*;
use bevy::prelude::*;

use stride::animation::AnimatorPlugin;
use stride::content::ContentPlugin;
use stride::core::CorePlugin;
use stride::locomotion::LocomotionPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stride".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .add_plugins((ContentPlugin, CorePlugin, LocomotionPlugin, AnimatorPlugin));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(stride::dev::DevPlugin);

    app.run();
}
