//! Batsman and bowler rig poses

use std::f32::consts::{FRAC_PI_3, PI};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{AnimationSample, Transform};
use crate::tuning::Trajectory;

/// Batsman stands at the crease facing the bowler
const BATSMAN_ROOT: Vec3 = Vec3::new(0.0, 0.0, 6.0);
/// Bat grip relative to the batsman root
const BAT_OFFSET: Vec3 = Vec3::new(0.15, 0.85, 0.25);

/// Bowling arm shoulder relative to the bowler body
const ARM_OFFSET: Vec3 = Vec3::new(0.25, 1.2, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatsmanPose {
    pub root: Transform,
    /// Relative to `root`
    pub body: Transform,
    /// Relative to `root`
    pub bat: Transform,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BowlerPose {
    pub body: Transform,
    /// Relative to `body`
    pub arm: Transform,
}

pub fn batsman(sample: &AnimationSample) -> BatsmanPose {
    let root = Transform::new(BATSMAN_ROOT, Vec3::new(0.0, PI, 0.0));

    if !sample.is_swinging {
        // Guard: bat grounded, angled back
        return BatsmanPose {
            root,
            body: Transform::IDENTITY,
            bat: Transform::new(BAT_OFFSET, Vec3::new(0.0, -0.2, -FRAC_PI_3)),
        };
    }

    let s = sample.swing_progress;
    BatsmanPose {
        root,
        body: Transform::new(Vec3::ZERO, Vec3::new(s * 0.1, s * 0.4, 0.0)),
        bat: Transform::new(
            BAT_OFFSET,
            Vec3::new(s * 0.5, -0.3 + s * 0.8, -FRAC_PI_3 + s * PI * 1.2),
        ),
    }
}

/// Bowler body and arm; run-up and stride markers come from the trajectory
/// so the rig stays with the ball under a tuning override.
pub fn bowler(sample: &AnimationSample, trajectory: &Trajectory) -> BowlerPose {
    let arm_at = |angle: f32| Transform::new(ARM_OFFSET, Vec3::new(angle, 0.0, 0.0));
    let start_z = trajectory.bowler_start_z;
    // Delivers from where the ball is released
    let crease_z = trajectory.release_z;
    let run_up_end = trajectory.bowler_run_up_end;
    let stride_end = trajectory.bowler_stride_end;

    if !sample.is_bowling() {
        return BowlerPose {
            body: Transform::from_translation(Vec3::new(0.0, 0.0, start_z)),
            arm: arm_at(0.0),
        };
    }

    let p = sample.bowling_progress;
    if p < run_up_end {
        let run = p / run_up_end;
        let z = start_z + run * (crease_z - start_z);
        // Stride bob
        let lean = (run * PI * 4.0).sin() * 0.1;
        BowlerPose {
            body: Transform::new(Vec3::new(0.0, 0.0, z), Vec3::new(lean, 0.0, 0.0)),
            arm: arm_at(0.0),
        }
    } else if p < stride_end {
        let d = (p - run_up_end) / (stride_end - run_up_end);
        BowlerPose {
            body: Transform::from_translation(Vec3::new(0.0, (d * PI).sin() * 0.3, crease_z)),
            arm: arm_at(-PI * 1.5 * d),
        }
    } else {
        // Follow-through
        BowlerPose {
            body: Transform::from_translation(Vec3::new(0.0, 0.0, crease_z)),
            arm: arm_at(-PI * 1.5 + (p - stride_end) * PI * 0.5),
        }
    }
}

/// Bails come off as soon as the batter is dismissed
pub fn bails_fallen(sample: &AnimationSample) -> bool {
    sample.is_out
}
