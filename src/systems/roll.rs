//! Roll controller systems
//!
//! `begin_roll` consumes trigger requests and launches the die from a random
//! tray corner; `check_die_settled` watches the body's velocities and flips
//! the state machine back to ready once it has rested long enough, with the
//! legacy fixed delay kept only as a timeout fallback.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::types::*;

/// Accept or reject throw requests and apply the impulse
pub fn begin_roll(
    mut requests: MessageReader<RollRequested>,
    mut roll_state: ResMut<RollState>,
    mut roll_result: ResMut<RollResult>,
    settings: Res<TableSettings>,
    mut die_query: Query<(&mut Transform, &mut Velocity, &mut ExternalImpulse), With<Die>>,
) {
    if requests.is_empty() {
        return;
    }
    // Coalesce however many requests arrived this frame into one throw.
    requests.clear();

    // State check behind the disabled button - a trigger while rolling is a
    // silent no-op.
    if !roll_state.is_ready() {
        return;
    }

    let Some((mut transform, mut velocity, mut impulse)) = die_query.iter_mut().next() else {
        return;
    };

    let mut rng = rand::thread_rng();
    let zone = ThrowZone::random(&mut rng);
    let profile = ImpulseProfile::for_zone(zone);

    transform.translation = profile.spawn;
    transform.rotation = Quat::from_euler(
        EulerRot::XYZ,
        rng.gen_range(0.0..std::f32::consts::TAU),
        rng.gen_range(0.0..std::f32::consts::TAU),
        rng.gen_range(0.0..std::f32::consts::TAU),
    );
    *velocity = Velocity::zero();

    impulse.impulse = profile.sample_impulse(&mut rng, settings.impulse_scale);
    impulse.torque_impulse = Vec3::ZERO;

    roll_result.value = None;
    roll_state.begin_roll(settings.audio_cue_delay_secs);

    info!(
        "throwing from the {} corner, impulse ({:.1}, {:.1})",
        zone.name(),
        impulse.impulse.x,
        impulse.impulse.z
    );
}

/// System to check if the die has settled and read off the result
pub fn check_die_settled(
    mut roll_state: ResMut<RollState>,
    mut roll_result: ResMut<RollResult>,
    settings: Res<TableSettings>,
    die_query: Query<(&Die, &Velocity, &Transform)>,
    time: Res<Time>,
) {
    if roll_state.phase != RollPhase::Rolling {
        return;
    }

    let Some((die, velocity, transform)) = die_query.iter().next() else {
        return;
    };

    roll_state.rolling_secs += time.delta_secs();

    let at_rest = velocity.linvel.length() < settings.rest_linear_threshold
        && velocity.angvel.length() < settings.rest_angular_threshold;
    if at_rest {
        roll_state.rest_secs += time.delta_secs();
    } else {
        roll_state.rest_secs = 0.0;
    }

    let timed_out = roll_state.rolling_secs > settings.max_roll_secs;
    if roll_state.rest_secs > settings.settle_grace_secs || timed_out {
        if timed_out && roll_state.rest_secs <= settings.settle_grace_secs {
            warn!(
                "die still moving after {:.1}s, re-enabling the throw anyway",
                settings.max_roll_secs
            );
        }

        roll_state.finish_roll();

        let value = face_up_value(die, transform);
        roll_result.value = Some(value);
        info!("rolled a {}", value);
    }
}

/// Determine the upward-facing value of the die from its rotation
fn face_up_value(die: &Die, transform: &Transform) -> u32 {
    let up = Vec3::Y;
    let mut best_match = 1;
    let mut best_dot = -2.0_f32;

    for (normal, value) in &die.face_normals {
        let world_normal = transform.rotation * *normal;
        let dot = world_normal.dot(up);

        if dot > best_dot {
            best_dot = dot;
            best_match = *value;
        }
    }

    best_match
}

/// System to update the status line
pub fn update_status_text(
    roll_state: Res<RollState>,
    roll_result: Res<RollResult>,
    mut text_query: Query<&mut Text, With<RollStatusText>>,
) {
    if !roll_state.is_changed() && !roll_result.is_changed() {
        return;
    }

    for mut text in text_query.iter_mut() {
        text.0 = if !roll_state.is_ready() {
            String::from("Rolling...")
        } else if let Some(value) = roll_result.value {
            format!("Rolled a {}\nPress SPACE or click Throw to roll again", value)
        } else {
            String::from("Press SPACE or click Throw")
        };
    }
}
