//! PD steering and hysteretic speed planning over the fitted centerline.

use crate::center::CenterFit;
use crate::types::Scene;
use log::debug;
use serde::Serialize;

pub const PWM_SERVO_MID: i32 = 1500;
pub const PWM_SERVO_MIN: i32 = 500;
pub const PWM_SERVO_MAX: i32 = 2500;

/// Frames of agreement the speed governor needs before shifting up.
const SHIFT_MAX: i32 = 10;
const SHIFT_MID: i32 = 5;
/// Sigma below which the centerline counts as smooth for shifting purposes.
const SIGMA_SMOOTH: f64 = 100.0;
/// Minimum fitted points before the governor trusts the curve at all.
const MIN_FIT_POINTS: usize = 10;

/// Steering and throttle gains plus the per-scene speed presets. All values
/// are track-tuned configuration.
#[derive(Clone, Copy, Debug)]
pub struct MotionParams {
    pub enable: bool,
    pub slow_down: bool,
    pub speed_low: f32,
    pub speed_high: f32,
    pub speed_bridge: f32,
    pub speed_catering: f32,
    pub speed_layby: f32,
    pub speed_obstacle: f32,
    pub speed_parking: f32,
    pub speed_ring: f32,
    /// Braking preset used once the finish zebra is confirmed.
    pub speed_down: f32,
    /// Proportional gain's error-magnitude slope and floor.
    pub run_p2: f32,
    pub run_p3: f32,
    pub turn_d: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            enable: true,
            slow_down: false,
            speed_low: 0.8,
            speed_high: 1.2,
            speed_bridge: 0.6,
            speed_catering: 0.6,
            speed_layby: 0.6,
            speed_obstacle: 0.5,
            speed_parking: 0.4,
            speed_ring: 0.7,
            speed_down: 0.3,
            run_p2: 0.15,
            run_p3: 1.0,
            turn_d: 4.0,
        }
    }
}

/// One frame's actuation decision.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionCommand {
    pub servo_pwm: i32,
    pub speed: f32,
}

/// Stateful planner: rate-limits the steering error across frames and runs
/// the up/down shift counter for the speed governor.
#[derive(Debug, Default)]
pub struct MotionPlanner {
    pub params: MotionParams,
    error_last: f32,
    count_shift: i32,
}

impl MotionPlanner {
    pub fn new(params: MotionParams) -> Self {
        Self {
            params,
            error_last: 0.0,
            count_shift: 0,
        }
    }

    /// PD steering from the weighted middle error. The incoming error is
    /// rate-limited to a tenth of the frame width per frame so a single bad
    /// fit cannot slam the servo; the proportional gain grows with the error
    /// magnitude to straighten hard corners.
    pub fn pose_control(&mut self, raw_error: f32, width: i32) -> i32 {
        let limit = width as f32 / 10.0;
        let error = raw_error.clamp(self.error_last - limit, self.error_last + limit);
        let turn_p = error.abs() * self.params.run_p2 + self.params.run_p3;
        let out = turn_p * error + self.params.turn_d * (error - self.error_last);
        self.error_last = error;
        let pwm = (PWM_SERVO_MID as f32 + out).round() as i32;
        pwm.clamp(PWM_SERVO_MIN, PWM_SERVO_MAX)
    }

    fn scene_speed(&self, scene: Scene) -> Option<f32> {
        match scene {
            // a confirmed zebra is the finish line: brake
            Scene::Zebra => Some(self.params.speed_down),
            Scene::Obstacle => Some(self.params.speed_obstacle),
            Scene::Bridge => Some(self.params.speed_bridge),
            Scene::Ring => Some(self.params.speed_ring),
            Scene::Catering => Some(self.params.speed_catering),
            Scene::Layby => Some(self.params.speed_layby),
            Scene::Parking => Some(self.params.speed_parking),
            Scene::Normal | Scene::Cross => None,
        }
    }

    /// Throttle for the frame. Disable and slow-down override everything,
    /// then scene presets short-circuit the governor; otherwise the shift
    /// counter integrates centerline smoothness and the planner runs fast
    /// only while it stays above the midpoint. Every low-speed bailout also
    /// zeroes the counter so a prior high-speed streak does not survive it.
    pub fn speed_control(&mut self, fit: &CenterFit, scene: Scene, height: i32) -> f32 {
        if !self.params.enable {
            self.count_shift = 0;
            return 0.0;
        }
        if self.params.slow_down {
            self.count_shift = 0;
            return self.params.speed_low;
        }
        if let Some(preset) = self.scene_speed(scene) {
            return preset;
        }
        if fit.center_edge.len() < MIN_FIT_POINTS {
            self.count_shift = 0;
            return self.params.speed_low;
        }
        if let Some(top) = fit.center_edge.last() {
            // fit never left the lower half: too little lookahead to commit
            if top.y > height / 2 {
                self.count_shift = 0;
                return self.params.speed_low;
            }
        }
        if fit.sigma_center.abs() < SIGMA_SMOOTH {
            self.count_shift += 1;
        } else {
            self.count_shift -= 1;
        }
        self.count_shift = self.count_shift.clamp(0, SHIFT_MAX);
        if self.count_shift > SHIFT_MID {
            self.params.speed_high
        } else {
            self.params.speed_low
        }
    }

    /// Full per-frame plan.
    pub fn plan(
        &mut self,
        fit: &CenterFit,
        middle_error: f32,
        scene: Scene,
        width: i32,
        height: i32,
    ) -> MotionCommand {
        let servo_pwm = self.pose_control(middle_error, width);
        let speed = self.speed_control(fit, scene, height);
        debug!("motion: scene={scene:?} pwm={servo_pwm} speed={speed:.2}");
        MotionCommand { servo_pwm, speed }
    }

    pub fn reset(&mut self) {
        self.error_last = 0.0;
        self.count_shift = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn smooth_fit(height: i32) -> CenterFit {
        CenterFit {
            center_edge: (0..34)
                .map(|i| Point::new(160, height - 10 - i * 6))
                .collect(),
            control_center: 160,
            sigma_center: 3.0,
        }
    }

    #[test]
    fn zero_error_holds_servo_mid() {
        let mut planner = MotionPlanner::default();
        assert_eq!(planner.pose_control(0.0, 320), PWM_SERVO_MID);
    }

    #[test]
    fn error_steps_are_rate_limited() {
        let mut planner = MotionPlanner::default();
        planner.pose_control(500.0, 320);
        assert_eq!(
            planner.error_last, 32.0,
            "rate limiter must cap the accepted error at width/10"
        );
    }

    #[test]
    fn steering_follows_the_adaptive_pd_formula() {
        let mut planner = MotionPlanner::default();
        let p = planner.params;
        let error = 10.0f32; // below the rate limit, accepted as-is
        let expected =
            PWM_SERVO_MID as f32 + (error * p.run_p2 + p.run_p3) * error + p.turn_d * error;
        assert_eq!(planner.pose_control(error, 320), expected.round() as i32);
        // second frame with the same error has a zero derivative term
        let expected = PWM_SERVO_MID as f32 + (error * p.run_p2 + p.run_p3) * error;
        assert_eq!(planner.pose_control(error, 320), expected.round() as i32);
    }

    #[test]
    fn extreme_errors_clamp_to_pwm_range() {
        let mut planner = MotionPlanner::default();
        planner.params.run_p3 = 1000.0;
        assert_eq!(planner.pose_control(400.0, 320), PWM_SERVO_MAX);
        planner.reset();
        assert_eq!(planner.pose_control(-400.0, 320), PWM_SERVO_MIN);
    }

    #[test]
    fn governor_shifts_up_after_sustained_smoothness() {
        let mut planner = MotionPlanner::default();
        let fit = smooth_fit(240);
        let mut speeds = Vec::new();
        for _ in 0..8 {
            speeds.push(planner.speed_control(&fit, Scene::Normal, 240));
        }
        assert_eq!(speeds[0], planner.params.speed_low);
        assert_eq!(*speeds.last().unwrap(), planner.params.speed_high);
    }

    #[test]
    fn rough_centerline_shifts_back_down() {
        let mut planner = MotionPlanner::default();
        let smooth = smooth_fit(240);
        for _ in 0..10 {
            planner.speed_control(&smooth, Scene::Normal, 240);
        }
        let mut rough = smooth_fit(240);
        rough.sigma_center = 800.0;
        let mut last = planner.params.speed_high;
        for _ in 0..6 {
            last = planner.speed_control(&rough, Scene::Normal, 240);
        }
        assert_eq!(last, planner.params.speed_low);
    }

    #[test]
    fn short_or_low_fits_force_low_speed() {
        let mut planner = MotionPlanner::default();
        let stub = CenterFit {
            center_edge: vec![Point::new(160, 230); 4],
            control_center: 160,
            sigma_center: 0.0,
        };
        assert_eq!(
            planner.speed_control(&stub, Scene::Normal, 240),
            planner.params.speed_low
        );
        let mut low = smooth_fit(240);
        for p in &mut low.center_edge {
            p.y = 200; // never reaches the upper half
        }
        assert_eq!(
            planner.speed_control(&low, Scene::Normal, 240),
            planner.params.speed_low
        );
    }

    #[test]
    fn low_speed_bailout_restarts_the_shift_streak() {
        let mut planner = MotionPlanner::default();
        let smooth = smooth_fit(240);
        for _ in 0..10 {
            planner.speed_control(&smooth, Scene::Normal, 240);
        }
        let stub = CenterFit {
            center_edge: vec![Point::new(160, 230); 4],
            control_center: 160,
            sigma_center: 0.0,
        };
        assert_eq!(
            planner.speed_control(&stub, Scene::Normal, 240),
            planner.params.speed_low
        );
        // the streak is gone: smooth frames must accumulate again
        for _ in 0..5 {
            assert_eq!(
                planner.speed_control(&smooth, Scene::Normal, 240),
                planner.params.speed_low
            );
        }
        assert_eq!(
            planner.speed_control(&smooth, Scene::Normal, 240),
            planner.params.speed_high
        );
    }

    #[test]
    fn slow_down_overrides_scene_presets() {
        let mut planner = MotionPlanner::default();
        planner.params.slow_down = true;
        let fit = smooth_fit(240);
        assert_eq!(
            planner.speed_control(&fit, Scene::Obstacle, 240),
            planner.params.speed_low
        );
        planner.params.enable = false;
        assert_eq!(planner.speed_control(&fit, Scene::Obstacle, 240), 0.0);
    }

    #[test]
    fn scene_presets_override_the_governor() {
        let mut planner = MotionPlanner::default();
        let fit = smooth_fit(240);
        assert_eq!(
            planner.speed_control(&fit, Scene::Zebra, 240),
            planner.params.speed_down
        );
        assert_eq!(
            planner.speed_control(&fit, Scene::Obstacle, 240),
            planner.params.speed_obstacle
        );
        planner.params.enable = false;
        assert_eq!(planner.speed_control(&fit, Scene::Zebra, 240), 0.0);
    }
}
