use glam::Vec2;

use crate::constants::{DEFAULT_HEIGHTMAP, FALLOFF_RATE};

/// Discrete actions the keyboard surface can trigger. The host maps raw key
/// identities to these; unrecognized keys never reach the control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchKey {
    /// Advance to the next heightmap variant, wrapping at the end.
    CycleHeightmap,
    ToggleShadows,
    ToggleWaves,
    ToggleClouds,
    ToggleEdgeFalloff,
    ToggleColors,
    /// Force all five render toggles off in one step.
    MasterOff,
    /// Capture the current mouse position, or release a prior capture.
    FreezeMouse,
}

impl SketchKey {
    /// Map a character key to its sketch action. Returns `None` for keys
    /// that are not part of the discrete keyboard surface.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'h' => Some(Self::CycleHeightmap),
            's' => Some(Self::ToggleShadows),
            'w' => Some(Self::ToggleWaves),
            'c' => Some(Self::ToggleClouds),
            'f' => Some(Self::ToggleEdgeFalloff),
            'o' => Some(Self::ToggleColors),
            'z' => Some(Self::MasterOff),
            'm' => Some(Self::FreezeMouse),
            _ => None,
        }
    }
}

/// Navigation keys polled per frame (as opposed to discrete presses).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub raise_falloff: bool,
    pub lower_falloff: bool,
}

/// Single source of truth for all user-toggleable rendering parameters.
/// One writer (the event loop) and one reader (the frame builder), both on
/// the same thread; mutations happen only in `on_key_press`/`apply_held`.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    heightmap_index: usize,
    heightmap_count: usize,
    pub shadows_enabled: bool,
    pub waves_enabled: bool,
    pub clouds_enabled: bool,
    pub edge_falloff_enabled: bool,
    pub colors_enabled: bool,
    /// Accumulated falloff exponent. Unbounded in both directions; the
    /// shader contract never specified a range, so none is enforced.
    pub falloff_exponent: f32,
    frozen_mouse: Option<Vec2>,
}

impl ControlState {
    /// Startup defaults: variant 2 (modulo the loaded count), every toggle
    /// on, zero falloff exponent, live mouse tracking.
    pub fn new(heightmap_count: usize) -> Self {
        assert!(heightmap_count > 0, "need at least one heightmap variant");
        Self {
            heightmap_index: DEFAULT_HEIGHTMAP % heightmap_count,
            heightmap_count,
            shadows_enabled: true,
            waves_enabled: true,
            clouds_enabled: true,
            edge_falloff_enabled: true,
            colors_enabled: true,
            falloff_exponent: 0.0,
            frozen_mouse: None,
        }
    }

    /// Currently selected heightmap variant. Always in `[0, count)`.
    pub fn heightmap_index(&self) -> usize {
        self.heightmap_index
    }

    /// Captured mouse position, if freeze is active.
    pub fn frozen_mouse(&self) -> Option<Vec2> {
        self.frozen_mouse
    }

    /// The mouse position the frame builder should use: the frozen capture
    /// when one exists, the live position otherwise.
    pub fn effective_mouse(&self, live: Vec2) -> Vec2 {
        self.frozen_mouse.unwrap_or(live)
    }

    /// Apply one discrete key press. Total over `SketchKey`: every action
    /// is a defined state transition.
    pub fn on_key_press(&mut self, key: SketchKey, live_mouse: Vec2) {
        match key {
            SketchKey::CycleHeightmap => {
                self.heightmap_index = (self.heightmap_index + 1) % self.heightmap_count;
            }
            SketchKey::ToggleShadows => self.shadows_enabled = !self.shadows_enabled,
            SketchKey::ToggleWaves => self.waves_enabled = !self.waves_enabled,
            SketchKey::ToggleClouds => self.clouds_enabled = !self.clouds_enabled,
            SketchKey::ToggleEdgeFalloff => {
                self.edge_falloff_enabled = !self.edge_falloff_enabled
            }
            SketchKey::ToggleColors => self.colors_enabled = !self.colors_enabled,
            SketchKey::MasterOff => {
                self.shadows_enabled = false;
                self.waves_enabled = false;
                self.clouds_enabled = false;
                self.edge_falloff_enabled = false;
                self.colors_enabled = false;
            }
            SketchKey::FreezeMouse => {
                self.frozen_mouse = match self.frozen_mouse {
                    Some(_) => None,
                    None => Some(live_mouse),
                };
            }
        }
    }

    /// Integrate held navigation keys over the frame delta. Raise and lower
    /// are applied as independent symmetric deltas, so holding both is a
    /// net no-op.
    pub fn apply_held(&mut self, held: HeldKeys, dt: f32) {
        if held.raise_falloff {
            self.falloff_exponent += FALLOFF_RATE * dt;
        }
        if held.lower_falloff {
            self.falloff_exponent -= FALLOFF_RATE * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUSE: Vec2 = Vec2::new(100.0, 200.0);

    #[test]
    fn test_defaults() {
        let state = ControlState::new(9);
        assert_eq!(state.heightmap_index(), 2);
        assert!(state.shadows_enabled);
        assert!(state.waves_enabled);
        assert!(state.clouds_enabled);
        assert!(state.edge_falloff_enabled);
        assert!(state.colors_enabled);
        assert_eq!(state.falloff_exponent, 0.0);
        assert!(state.frozen_mouse().is_none());
    }

    #[test]
    fn test_default_index_reduced_for_small_lists() {
        // Index invariant must hold even with fewer than 3 variants.
        assert_eq!(ControlState::new(1).heightmap_index(), 0);
        assert_eq!(ControlState::new(2).heightmap_index(), 0);
        assert_eq!(ControlState::new(3).heightmap_index(), 2);
    }

    #[test]
    fn test_cycle_stays_in_range_and_wraps() {
        let n = 9;
        let mut state = ControlState::new(n);
        let start = state.heightmap_index();
        for _ in 0..100 {
            state.on_key_press(SketchKey::CycleHeightmap, MOUSE);
            assert!(state.heightmap_index() < n);
        }
        // n presses return to the original value.
        let mut state = ControlState::new(n);
        for _ in 0..n {
            state.on_key_press(SketchKey::CycleHeightmap, MOUSE);
        }
        assert_eq!(state.heightmap_index(), start);
    }

    #[test]
    fn test_three_presses_from_default() {
        let mut state = ControlState::new(9);
        for _ in 0..3 {
            state.on_key_press(SketchKey::CycleHeightmap, MOUSE);
        }
        assert_eq!(state.heightmap_index(), (2 + 3) % 9);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for key in [
            SketchKey::ToggleShadows,
            SketchKey::ToggleWaves,
            SketchKey::ToggleClouds,
            SketchKey::ToggleEdgeFalloff,
            SketchKey::ToggleColors,
        ] {
            let mut state = ControlState::new(9);
            let before = state.clone();
            state.on_key_press(key, MOUSE);
            assert_ne!(state, before, "{key:?} should change state");
            state.on_key_press(key, MOUSE);
            assert_eq!(state, before, "{key:?} twice should restore state");
        }
    }

    #[test]
    fn test_master_off_forces_all_flags_false() {
        let mut state = ControlState::new(9);
        // From defaults.
        state.on_key_press(SketchKey::MasterOff, MOUSE);
        assert!(!state.shadows_enabled);
        assert!(!state.waves_enabled);
        assert!(!state.clouds_enabled);
        assert!(!state.edge_falloff_enabled);
        assert!(!state.colors_enabled);

        // From a mixed state.
        state.on_key_press(SketchKey::ToggleWaves, MOUSE);
        state.on_key_press(SketchKey::ToggleColors, MOUSE);
        state.on_key_press(SketchKey::MasterOff, MOUSE);
        assert!(!state.waves_enabled && !state.colors_enabled);
    }

    #[test]
    fn test_freeze_captures_first_position() {
        let mut state = ControlState::new(9);
        let captured = Vec2::new(320.0, 240.0);
        state.on_key_press(SketchKey::FreezeMouse, captured);
        assert_eq!(state.frozen_mouse(), Some(captured));

        // Mouse movement after capture does not affect the frozen value.
        let moved = Vec2::new(700.0, 50.0);
        assert_eq!(state.effective_mouse(moved), captured);

        // Second press releases the capture and restores live tracking.
        state.on_key_press(SketchKey::FreezeMouse, moved);
        assert!(state.frozen_mouse().is_none());
        assert_eq!(state.effective_mouse(moved), moved);
    }

    #[test]
    fn test_freeze_idempotent_over_two_presses() {
        let mut state = ControlState::new(9);
        let before = state.clone();
        state.on_key_press(SketchKey::FreezeMouse, MOUSE);
        state.on_key_press(SketchKey::FreezeMouse, MOUSE);
        assert_eq!(state, before);
    }

    #[test]
    fn test_held_raise_integrates_at_fixed_rate() {
        let mut state = ControlState::new(9);
        let held = HeldKeys {
            raise_falloff: true,
            lower_falloff: false,
        };
        // 60 ticks of 1/60 s = 1 second.
        for _ in 0..60 {
            state.apply_held(held, 1.0 / 60.0);
        }
        assert!((state.falloff_exponent - FALLOFF_RATE).abs() < 1e-4);
    }

    #[test]
    fn test_held_lower_is_symmetric_and_unclamped() {
        let mut state = ControlState::new(9);
        let held = HeldKeys {
            raise_falloff: false,
            lower_falloff: true,
        };
        state.apply_held(held, 2.0);
        // No lower bound: the exponent drifts negative freely.
        assert!((state.falloff_exponent + 2.0 * FALLOFF_RATE).abs() < 1e-5);
    }

    #[test]
    fn test_both_held_is_net_zero() {
        let mut state = ControlState::new(9);
        let held = HeldKeys {
            raise_falloff: true,
            lower_falloff: true,
        };
        state.apply_held(held, 0.5);
        assert_eq!(state.falloff_exponent, 0.0);
    }

    #[test]
    fn test_session_walkthrough() {
        // Defaults with a 9-variant list, then a short interactive session.
        let mut state = ControlState::new(9);

        for _ in 0..3 {
            state.on_key_press(SketchKey::CycleHeightmap, MOUSE);
        }
        assert_eq!(state.heightmap_index(), 5);

        state.on_key_press(SketchKey::MasterOff, MOUSE);
        assert!(
            !state.shadows_enabled
                && !state.waves_enabled
                && !state.clouds_enabled
                && !state.edge_falloff_enabled
                && !state.colors_enabled
        );

        let first = Vec2::new(10.0, 20.0);
        let moved = Vec2::new(600.0, 600.0);
        state.on_key_press(SketchKey::FreezeMouse, first);
        assert_eq!(state.effective_mouse(moved), first);
        state.on_key_press(SketchKey::FreezeMouse, moved);
        assert_eq!(state.effective_mouse(moved), moved);
    }

    #[test]
    fn test_key_char_mapping() {
        assert_eq!(SketchKey::from_char('h'), Some(SketchKey::CycleHeightmap));
        assert_eq!(SketchKey::from_char('s'), Some(SketchKey::ToggleShadows));
        assert_eq!(SketchKey::from_char('w'), Some(SketchKey::ToggleWaves));
        assert_eq!(SketchKey::from_char('c'), Some(SketchKey::ToggleClouds));
        assert_eq!(
            SketchKey::from_char('f'),
            Some(SketchKey::ToggleEdgeFalloff)
        );
        assert_eq!(SketchKey::from_char('o'), Some(SketchKey::ToggleColors));
        assert_eq!(SketchKey::from_char('z'), Some(SketchKey::MasterOff));
        assert_eq!(SketchKey::from_char('m'), Some(SketchKey::FreezeMouse));
        assert_eq!(SketchKey::from_char('q'), None);
    }
}
