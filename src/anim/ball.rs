//! Ball path sampling
//!
//! Before release the ball rides in the bowler's hand; after release it
//! dips to the pitching point, kicks up off the bounce and rises to bat
//! height. Struck balls follow one of six shot shapes.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use super::{AnimationSample, BallPhase};
use crate::tuning::Trajectory;
use crate::{clamp01, inverse_lerp, lerp};

/// Bowler's hand at the top of the run-up
pub const HAND_START: Vec3 = Vec3::new(0.35, 1.8, -14.0);
const SHOULDER_Y: f32 = 1.25;
const ARM_LENGTH: f32 = 0.55;
/// Lowest the ball is drawn (resting on the turf)
const GROUND_Y: f32 = 0.06;
/// Contact point height for struck balls
const BAT_HEIGHT: f32 = 0.85;

/// Ball spin while airborne (rad/s around x and z)
const SPIN: Vec3 = Vec3::new(25.0, 0.0, 10.0);

/// Hand z over the run-up; arrives at the release point
fn run_up_z(progress: f32, trajectory: &Trajectory) -> f32 {
    let run = clamp01(progress / trajectory.stride_start);
    lerp(HAND_START.z, trajectory.release_z, run)
}

/// Delivery stride position in [0, 1], `None` during the run-up
fn stride(progress: f32, trajectory: &Trajectory) -> Option<f32> {
    (progress >= trajectory.stride_start).then(|| {
        clamp01(inverse_lerp(
            trajectory.stride_start,
            trajectory.release_point,
            progress,
        ))
    })
}

/// Ball in the bowler's hand during run-up and delivery stride
pub fn hand_position(progress: f32, trajectory: &Trajectory) -> Vec3 {
    let hand_z = run_up_z(progress, trajectory);
    let Some(stride) = stride(progress, trajectory) else {
        return Vec3::new(HAND_START.x, HAND_START.y, hand_z);
    };

    // Windmill: the hand orbits the shoulder once over the stride
    let angle = -stride * TAU + FRAC_PI_2;
    let y = SHOULDER_Y + angle.sin() * ARM_LENGTH;
    let z = hand_z + angle.cos() * ARM_LENGTH * 0.5;
    Vec3::new(HAND_START.x, y.max(0.8), z)
}

/// Hand on a wicket ball: carried high, then a three-quarter overarm sweep
pub fn out_hand_position(progress: f32, trajectory: &Trajectory) -> Vec3 {
    let hand_z = run_up_z(progress, trajectory);
    let Some(stride) = stride(progress, trajectory) else {
        return Vec3::new(HAND_START.x, 2.5, hand_z);
    };

    let angle = stride * PI * 1.5;
    let y = SHOULDER_Y + angle.sin() * 0.8;
    let z = hand_z + angle.cos() * 0.5;
    Vec3::new(HAND_START.x, (y + 0.8).max(1.5), z)
}

/// Normalized flight parameter after release, `None` while still in hand
fn released(progress: f32, trajectory: &Trajectory) -> Option<f32> {
    (progress >= trajectory.release_point)
        .then(|| clamp01(inverse_lerp(trajectory.release_point, 1.0, progress)))
}

/// Height profile of a delivery down the pitch
fn delivery_height(t: f32, bounce_t: f32, rebound: f32, rise: impl Fn(f32) -> f32) -> f32 {
    if t < 0.08 {
        // Leaving the hand
        2.3 - t * 4.0
    } else if t < bounce_t {
        let local = inverse_lerp(0.08, bounce_t, t);
        1.98 - (1.98 - GROUND_Y) * local.powf(1.4)
    } else if t < bounce_t + 0.1 {
        let local = (t - bounce_t) / 0.1;
        GROUND_Y + (local * PI).sin() * rebound
    } else {
        rise(inverse_lerp(bounce_t + 0.1, 1.0, t))
    }
}

/// Ball position during a normal delivery
pub fn bowling_position(progress: f32, trajectory: &Trajectory) -> Vec3 {
    let Some(t) = released(progress, trajectory) else {
        return hand_position(progress, trajectory);
    };

    let z = lerp(trajectory.release_z, trajectory.bat_z, t);
    let bounce_t = inverse_lerp(trajectory.release_z, trajectory.bat_z, trajectory.bounce_z);
    let y = delivery_height(t, bounce_t, 0.4, |local| {
        0.4 + (0.9 - 0.4) * (local * FRAC_PI_2).sin()
    });
    // A little swing in the air
    let x = (t * PI * 0.4).sin() * 0.1;

    Vec3::new(x, y.max(GROUND_Y), z)
}

/// Ball position on a wicket: straight on, low, into the stumps
pub fn out_position(progress: f32, trajectory: &Trajectory) -> Vec3 {
    let Some(t) = released(progress, trajectory) else {
        return out_hand_position(progress, trajectory);
    };

    let z = lerp(trajectory.release_z, trajectory.stumps_z, t);
    let bounce_t = inverse_lerp(
        trajectory.release_z,
        trajectory.stumps_z,
        trajectory.bounce_z,
    );
    let y = delivery_height(t, bounce_t, 0.3, |local| {
        0.35 + (local * PI * 0.35).sin() * 0.2
    });

    Vec3::new(0.0, y.max(GROUND_Y), z)
}

/// Ball position `t` (0-1) of the way through a shot worth `runs`
pub fn hit_position(runs: u8, t: f32, trajectory: &Trajectory) -> Vec3 {
    let t = clamp01(t);
    let start = Vec3::new(0.0, BAT_HEIGHT, trajectory.bat_z);
    let ease = 1.0 - (1.0 - t).powf(2.5);

    let offset = match runs {
        // Pushed into the off side, running along the ground
        1 => Vec3::new(
            ease * 5.0,
            (start.y * (1.0 - ease * 0.92)).max(GROUND_Y) - start.y,
            -ease * 10.0,
        ),
        // Flicked to leg, skipping
        2 => Vec3::new(
            -ease * 10.0,
            (start.y * (1.0 - ease * 0.85) + (t * TAU).sin() * 0.15).max(GROUND_Y) - start.y,
            -ease * 20.0,
        ),
        // Lofted drive
        3 => Vec3::new(ease * 15.0, (t * PI).sin() * 5.0, -ease * 28.0),
        // Along the ground to the rope
        4 => Vec3::new(
            -ease * 20.0,
            (start.y * (1.0 - ease * 0.6) + (t * PI * 3.0).sin() * 0.12).max(GROUND_Y)
                - start.y,
            -ease * 45.0,
        ),
        // High pull
        5 => Vec3::new(ease * 12.0, (t * PI * 0.75).sin() * 14.0, -ease * 40.0),
        // Out of the ground
        6 => {
            let six = (t * 1.15).min(1.0);
            Vec3::new(
                (six * PI * 0.35).sin() * 10.0,
                six * 28.0 + (six * PI).sin() * 15.0,
                -six * 60.0,
            )
        }
        // Edge: the ball dies at the bat
        _ => Vec3::ZERO,
    };

    start + offset
}

/// Ball position for the current frame
pub fn position(sample: &AnimationSample, trajectory: &Trajectory) -> Vec3 {
    match sample.ball {
        BallPhase::Idle => HAND_START,
        BallPhase::Bowling => bowling_position(sample.bowling_progress, trajectory),
        BallPhase::Hit => {
            let runs = sample.hit_result.map(|o| o.runs()).unwrap_or(0);
            hit_position(runs, sample.flight_progress, trajectory)
        }
        BallPhase::Out => out_position(sample.bowling_progress, trajectory),
    }
}

/// Spin rate (rad/s); only once the ball has left the hand
pub fn spin_rate(sample: &AnimationSample, trajectory: &Trajectory) -> Vec3 {
    let airborne = match sample.ball {
        BallPhase::Hit => true,
        BallPhase::Bowling | BallPhase::Out => {
            sample.bowling_progress >= trajectory.release_point
        }
        BallPhase::Idle => false,
    };
    if airborne { SPIN } else { Vec3::ZERO }
}

/// Ball has arrived in the batting zone this frame
pub fn reached_bat(sample: &AnimationSample, trajectory: &Trajectory) -> bool {
    sample.ball == BallPhase::Bowling && sample.bowling_progress > trajectory.bat_zone
}

/// Hit animation has run its course
pub fn flight_complete(sample: &AnimationSample, trajectory: &Trajectory) -> bool {
    sample.ball == BallPhase::Hit && sample.flight_progress >= trajectory.flight_complete
}
