//! Viewport camera state machine
//!
//! Two named viewing modes (orbit and planar move), each with its own
//! remembered pose. Switching modes animates the pose over a fixed number
//! of steps; zoom runs as a held ramp on its own tick. Everything here is
//! cooperative: the app calls [`CameraController::update`] once per frame
//! with the elapsed time and the controller fires whole ticks internally,
//! so the same code is driven deterministically from tests.

use crate::math::{angle_delta_deg, lerp, lerp_angle_deg, Vec3};
use crate::room::RoomDimensions;

/// Number of interpolation steps in a mode transition
pub const TRANSITION_STEPS: u32 = 10;
/// Seconds per transition step
pub const TRANSITION_STEP_SECS: f32 = 0.03;
/// Seconds per smooth-zoom tick
pub const SMOOTH_ZOOM_TICK_SECS: f32 = 0.01;

/// Discrete zoom factors (one application per action)
const STEP_ZOOM_IN: f32 = 0.95;
const STEP_ZOOM_OUT: f32 = 1.05;
/// Smooth-zoom factors (one application per tick while held)
const SMOOTH_ZOOM_IN: f32 = 0.98;
const SMOOTH_ZOOM_OUT: f32 = 1.02;

/// Elevation stays within straight-down to straight-up
const ELEVATION_LIMIT: f32 = 90.0;

/// Named camera modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Free rotation around a centroid
    Orbit,
    /// Planar pan with a top-down default pose
    Move,
}

impl CameraMode {
    pub fn label(&self) -> &'static str {
        match self {
            CameraMode::Orbit => "orbit",
            CameraMode::Move => "move",
        }
    }
}

/// Zoom direction for both discrete steps and the smooth ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    fn step_factor(self) -> f32 {
        match self {
            ZoomDirection::In => STEP_ZOOM_IN,
            ZoomDirection::Out => STEP_ZOOM_OUT,
        }
    }

    fn smooth_factor(self) -> f32 {
        match self {
            ZoomDirection::In => SMOOTH_ZOOM_IN,
            ZoomDirection::Out => SMOOTH_ZOOM_OUT,
        }
    }
}

/// Camera pose: spherical position around a look-at center.
///
/// Azimuth is measured in the xy-plane in degrees, elevation above it;
/// both follow the z-up room coordinate convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub distance: f32,
    pub elevation: f32,
    pub azimuth: f32,
    pub center: Vec3,
}

impl CameraPose {
    /// Default orbit pose (the view the tool opens with)
    pub fn orbit_default() -> Self {
        Self { distance: 10.0, elevation: 17.0, azimuth: 295.0, center: Vec3::ZERO }
    }

    /// Default move pose: straight down onto the floor plan
    pub fn move_default() -> Self {
        Self { distance: 10.0, elevation: 90.0, azimuth: 270.0, center: Vec3::new(1.5, 1.5, 0.0) }
    }

    /// Eye position in room space
    pub fn eye_position(&self) -> Vec3 {
        let az = self.azimuth.to_radians();
        let el = self.elevation.to_radians();
        let offset = Vec3::new(
            el.cos() * az.cos(),
            el.cos() * az.sin(),
            el.sin(),
        );
        self.center + offset.scale(self.distance)
    }

    /// Screen-aligned right and up vectors for panning.
    ///
    /// Near-vertical forward vectors degenerate against world up, so the
    /// right vector falls back to the world x-axis there.
    pub fn basis_vectors(&self) -> (Vec3, Vec3) {
        let forward = (self.center - self.eye_position()).normalize();
        if forward.z.abs() > 0.99 {
            let right = Vec3::new(1.0, 0.0, 0.0);
            let up = right.cross(forward);
            (right, up)
        } else {
            let right = forward.cross(Vec3::UP).normalize();
            let up = right.cross(forward).normalize();
            (right, up)
        }
    }

    /// Interpolate between two poses. Distance and center move linearly;
    /// the angles take the shortest path around the circle. Azimuth wraps
    /// into [0, 360); elevation stays in its [-90, 90] band.
    fn interpolated(start: &CameraPose, target: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            distance: lerp(start.distance, target.distance, t),
            elevation: start.elevation + t * angle_delta_deg(start.elevation, target.elevation),
            azimuth: lerp_angle_deg(start.azimuth, target.azimuth, t),
            center: start.center.lerp(target.center, t),
        }
    }
}

/// An in-flight mode transition. Runs to completion once started.
#[derive(Debug, Clone)]
struct Transition {
    start: CameraPose,
    target: CameraPose,
    target_mode: CameraMode,
    step: u32,
}

/// Owns the live camera pose and the per-mode saved poses.
#[derive(Debug)]
pub struct CameraController {
    mode: CameraMode,
    pose: CameraPose,
    saved_orbit: CameraPose,
    saved_move: CameraPose,
    transition: Option<Transition>,
    transition_accum: f32,
    zoom_ramp: Option<ZoomDirection>,
    zoom_accum: f32,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            mode: CameraMode::Orbit,
            pose: CameraPose::orbit_default(),
            saved_orbit: CameraPose::orbit_default(),
            saved_move: CameraPose::move_default(),
            transition: None,
            transition_accum: 0.0,
            zoom_ramp: None,
            zoom_accum: 0.0,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn saved_pose(&self, mode: CameraMode) -> &CameraPose {
        match mode {
            CameraMode::Orbit => &self.saved_orbit,
            CameraMode::Move => &self.saved_move,
        }
    }

    fn saved_pose_mut(&mut self, mode: CameraMode) -> &mut CameraPose {
        match mode {
            CameraMode::Orbit => &mut self.saved_orbit,
            CameraMode::Move => &mut self.saved_move,
        }
    }

    /// Remember the live pose for the current mode. Callers invoke this
    /// right before switching away so re-entering the mode restores the
    /// view the user left, not the session default.
    pub fn save_current_pose(&mut self) {
        let pose = self.pose;
        *self.saved_pose_mut(self.mode) = pose;
    }

    /// Begin an animated transition to `target`. Returns false (and does
    /// nothing) while a transition is in flight or when already in the
    /// target mode.
    pub fn switch_mode(&mut self, target: CameraMode) -> bool {
        if self.is_animating() || target == self.mode {
            return false;
        }
        self.transition = Some(Transition {
            start: self.pose,
            target: *self.saved_pose(target),
            target_mode: target,
            step: 0,
        });
        self.transition_accum = 0.0;
        true
    }

    /// Advance both tickers by `dt` seconds of wall time.
    pub fn update(&mut self, dt: f32) {
        if self.transition.is_some() {
            self.transition_accum += dt;
            while self.transition_accum >= TRANSITION_STEP_SECS && self.transition.is_some() {
                self.transition_accum -= TRANSITION_STEP_SECS;
                self.animation_step();
            }
            // The transition owns the pose; zoom ticks do not accumulate
            // behind it.
            self.zoom_accum = 0.0;
            return;
        }

        if let Some(direction) = self.zoom_ramp {
            self.zoom_accum += dt;
            while self.zoom_accum >= SMOOTH_ZOOM_TICK_SECS {
                self.zoom_accum -= SMOOTH_ZOOM_TICK_SECS;
                self.pose.distance *= direction.smooth_factor();
            }
        }
    }

    /// One fixed interpolation step. On the final step the mode flips and
    /// the pose lands exactly on the target.
    fn animation_step(&mut self) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        transition.step += 1;
        let t = transition.step as f32 / TRANSITION_STEPS as f32;
        self.pose = CameraPose::interpolated(&transition.start, &transition.target, t);
        if transition.step >= TRANSITION_STEPS {
            self.mode = transition.target_mode;
            self.pose = transition.target;
            self.transition = None;
        }
    }

    /// Apply one discrete zoom step. No-op during a mode transition.
    pub fn step_zoom(&mut self, direction: ZoomDirection) {
        if self.is_animating() {
            return;
        }
        self.pose.distance *= direction.step_factor();
    }

    /// Start (or redirect) the held zoom ramp. Restarting while active only
    /// updates the direction; the tick phase is preserved.
    pub fn start_smooth_zoom(&mut self, direction: ZoomDirection) {
        if self.zoom_ramp.is_none() {
            self.zoom_accum = 0.0;
        }
        self.zoom_ramp = Some(direction);
    }

    /// Stop the held zoom ramp.
    pub fn stop_smooth_zoom(&mut self) {
        self.zoom_ramp = None;
    }

    /// Frame the room: look at its center from twice the largest extent.
    pub fn recenter_on_room(&mut self, dims: &RoomDimensions) {
        if self.is_animating() {
            return;
        }
        self.pose.center = Vec3::new(dims.width / 2.0, dims.length / 2.0, dims.height / 2.0);
        self.pose.distance = 2.0 * dims.max_extent();
    }

    /// Mode-aware recenter (double-click): move mode looks at the floor
    /// plane, orbit mode at the volumetric center.
    pub fn recenter_for_mode(&mut self, dims: &RoomDimensions) {
        if self.is_animating() {
            return;
        }
        let z = match self.mode {
            CameraMode::Move => 0.0,
            CameraMode::Orbit => dims.height / 2.0,
        };
        self.pose.center = Vec3::new(dims.width / 2.0, dims.length / 2.0, z);
        self.pose.distance = 2.0 * dims.max_extent();
    }

    /// Rotate the view by angle deltas in degrees. No-op while animating.
    pub fn orbit_by(&mut self, d_azimuth: f32, d_elevation: f32) {
        if self.is_animating() {
            return;
        }
        self.pose.azimuth = (self.pose.azimuth + d_azimuth).rem_euclid(360.0);
        self.pose.elevation =
            (self.pose.elevation + d_elevation).clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
    }

    /// Translate the look-at center. No-op while animating.
    pub fn pan_by(&mut self, delta: Vec3) {
        if self.is_animating() {
            return;
        }
        self.pose.center = self.pose.center + delta;
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    /// Run the controller until the in-flight transition completes
    fn finish_transition(camera: &mut CameraController) {
        for _ in 0..TRANSITION_STEPS {
            camera.update(TRANSITION_STEP_SECS);
        }
        assert!(!camera.is_animating());
    }

    #[test]
    fn test_switch_mode_animates_and_lands_on_saved_pose() {
        let mut camera = CameraController::new();
        assert_eq!(camera.mode(), CameraMode::Orbit);

        assert!(camera.switch_mode(CameraMode::Move));
        assert!(camera.is_animating());
        // Mode only flips once the transition completes
        assert_eq!(camera.mode(), CameraMode::Orbit);

        finish_transition(&mut camera);
        assert_eq!(camera.mode(), CameraMode::Move);
        let expected = CameraPose::move_default();
        assert!(approx(camera.pose().distance, expected.distance));
        assert!(approx(camera.pose().elevation, expected.elevation));
        assert!(approx(camera.pose().azimuth, expected.azimuth));
        assert_eq!(camera.pose().center, expected.center);
    }

    #[test]
    fn test_switch_rejected_while_animating_or_redundant() {
        let mut camera = CameraController::new();
        assert!(!camera.switch_mode(CameraMode::Orbit), "already in orbit");

        assert!(camera.switch_mode(CameraMode::Move));
        assert!(!camera.switch_mode(CameraMode::Orbit), "transition in flight");
        finish_transition(&mut camera);
        assert!(camera.switch_mode(CameraMode::Orbit));
    }

    #[test]
    fn test_azimuth_interpolation_takes_shortest_path() {
        let mut camera = CameraController::new();
        camera.pose.azimuth = 350.0;
        camera.saved_move.azimuth = 10.0;
        camera.saved_move.elevation = camera.pose.elevation;
        camera.saved_move.distance = camera.pose.distance;
        camera.saved_move.center = camera.pose.center;

        assert!(camera.switch_mode(CameraMode::Move));
        let mut seen = Vec::new();
        for _ in 0..TRANSITION_STEPS {
            camera.update(TRANSITION_STEP_SECS);
            seen.push(camera.pose().azimuth);
        }
        for az in &seen {
            let in_range = (*az >= 350.0 && *az < 360.0) || (*az >= 0.0 && *az <= 10.0);
            assert!(in_range, "azimuth {} left the short arc", az);
        }
        // Halfway through a 20-degree crossing sits on zero
        assert!(approx(seen[4], 0.0));
    }

    #[test]
    fn test_mode_round_trip_restores_saved_pose() {
        let mut camera = CameraController::new();

        camera.switch_mode(CameraMode::Move);
        finish_transition(&mut camera);

        // User pans and zooms around in move mode, then leaves
        camera.pan_by(Vec3::new(2.0, 1.0, 0.0));
        camera.step_zoom(ZoomDirection::In);
        let left_at = *camera.pose();
        camera.save_current_pose();
        camera.switch_mode(CameraMode::Orbit);
        finish_transition(&mut camera);

        camera.save_current_pose();
        camera.switch_mode(CameraMode::Move);
        finish_transition(&mut camera);

        assert_eq!(camera.pose().center, left_at.center);
        assert!(approx(camera.pose().distance, left_at.distance));
    }

    #[test]
    fn test_zoom_is_noop_while_animating() {
        let mut camera = CameraController::new();
        camera.switch_mode(CameraMode::Move);
        let during = camera.pose().distance;

        camera.step_zoom(ZoomDirection::In);
        assert_eq!(camera.pose().distance, during);

        // Holding smooth zoom through the rest of the transition applies
        // no zoom ticks; the pose lands exactly on the saved target.
        camera.start_smooth_zoom(ZoomDirection::In);
        for _ in 0..TRANSITION_STEPS {
            camera.update(TRANSITION_STEP_SECS);
        }
        assert!(!camera.is_animating());
        camera.stop_smooth_zoom();
        assert!(approx(camera.pose().distance, CameraPose::move_default().distance));
    }

    #[test]
    fn test_smooth_zoom_ramp_applies_per_tick() {
        let mut camera = CameraController::new();
        let start = camera.pose().distance;
        camera.start_smooth_zoom(ZoomDirection::In);
        camera.update(SMOOTH_ZOOM_TICK_SECS * 5.0);
        let expected = start * SMOOTH_ZOOM_IN.powi(5);
        assert!(approx(camera.pose().distance, expected));

        // Redirecting the ramp keeps it running without a restart
        camera.start_smooth_zoom(ZoomDirection::Out);
        camera.update(SMOOTH_ZOOM_TICK_SECS * 5.0);
        let expected = expected * SMOOTH_ZOOM_OUT.powi(5);
        assert!(approx(camera.pose().distance, expected));

        camera.stop_smooth_zoom();
        camera.update(1.0);
        assert!(approx(camera.pose().distance, expected));
    }

    #[test]
    fn test_discrete_zoom_factors() {
        let mut camera = CameraController::new();
        let start = camera.pose().distance;
        camera.step_zoom(ZoomDirection::In);
        assert!(approx(camera.pose().distance, start * 0.95));
        camera.step_zoom(ZoomDirection::Out);
        assert!(approx(camera.pose().distance, start * 0.95 * 1.05));
    }

    #[test]
    fn test_recenter_on_room() {
        let mut camera = CameraController::new();
        let dims = RoomDimensions::new(4.0, 5.0, 2.5).unwrap();
        camera.recenter_on_room(&dims);
        assert_eq!(camera.pose().center, Vec3::new(2.0, 2.5, 1.25));
        assert!(approx(camera.pose().distance, 10.0));
    }

    #[test]
    fn test_mode_aware_recenter_uses_floor_in_move_mode() {
        let mut camera = CameraController::new();
        let dims = RoomDimensions::new(4.0, 5.0, 2.5).unwrap();

        camera.recenter_for_mode(&dims);
        assert_eq!(camera.pose().center.z, 1.25);

        camera.switch_mode(CameraMode::Move);
        finish_transition(&mut camera);
        camera.recenter_for_mode(&dims);
        assert_eq!(camera.pose().center.z, 0.0);
    }

    #[test]
    fn test_orbit_clamps_elevation_and_wraps_azimuth() {
        let mut camera = CameraController::new();
        camera.orbit_by(100.0, 200.0);
        assert!(approx(camera.pose().azimuth, 35.0));
        assert_eq!(camera.pose().elevation, ELEVATION_LIMIT);
        camera.orbit_by(-100.0, -400.0);
        assert_eq!(camera.pose().elevation, -ELEVATION_LIMIT);
    }

    #[test]
    fn test_basis_vectors_degenerate_near_vertical() {
        let pose = CameraPose { distance: 10.0, elevation: 90.0, azimuth: 270.0, center: Vec3::ZERO };
        let (right, _up) = pose.basis_vectors();
        assert_eq!(right, Vec3::new(1.0, 0.0, 0.0));

        let oblique = CameraPose::orbit_default();
        let (right, up) = oblique.basis_vectors();
        assert!(approx(right.len(), 1.0));
        assert!(approx(up.len(), 1.0));
        assert!(approx(right.dot(up), 0.0));
    }
}
