use glam::Vec2;

use crate::{geometry::Rect, input::InputState};

/// Unit (or zero) movement direction for the current key state.
/// Opposing keys cancel; diagonals are normalized so they are not faster
/// than straight movement.
pub fn movement_intent(input: &InputState) -> Vec2 {
    let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) as f32;
    Vec2::new(axis(input.left, input.right), axis(input.up, input.down)).normalize_or_zero()
}

/// Simulation state: the static map and the player square inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub map: Rect,
    pub player: Rect,
    /// Pixels per millisecond.
    pub speed: f32,
}

impl World {
    /// Map is a square half the short window side, centered; the player
    /// starts centered in the window.
    pub fn layout(width: u32, height: u32, player_size: u32, speed: f32) -> Self {
        let (w, h) = (width as i32, height as i32);
        let side = w.min(h) / 2;
        let size = player_size as i32;
        Self {
            map: Rect::centered(w, h, side, side),
            player: Rect::centered(w, h, size, size),
            speed,
        }
    }

    /// Advances one fixed step of `dt_ms` milliseconds.
    pub fn step(&mut self, input: &InputState, dt_ms: f32) {
        let delta = movement_intent(input) * self.speed * dt_ms;

        // `as` truncates toward zero (and saturates), so sub-pixel motion is
        // dropped in both directions.
        let x = self.player.x.saturating_add(delta.x as i32);
        let y = self.player.y.saturating_add(delta.y as i32);

        self.player.x = clamp_axis(x, self.map.x, self.map.w, self.player.w);
        self.player.y = clamp_axis(y, self.map.y, self.map.h, self.player.h);

        log::trace!("player at ({}, {})", self.player.x, self.player.y);
    }
}

fn clamp_axis(pos: i32, origin: i32, extent: i32, size: i32) -> i32 {
    let hi = (origin + extent - size).max(origin);
    pos.clamp(origin, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    const STEP_MS: f32 = 1000.0 / 60.0;

    fn input_with(keys: &[Key]) -> InputState {
        let mut input = InputState::default();
        for &k in keys {
            input.on_key_down(k);
        }
        input
    }

    fn default_world() -> World {
        World::layout(800, 600, 20, 0.1)
    }

    #[test]
    fn layout_for_800x600() {
        let world = default_world();
        assert_eq!(world.map, Rect::new(250, 150, 300, 300));
        assert_eq!(world.player, Rect::new(390, 290, 20, 20));
    }

    #[test]
    fn intent_magnitude_for_all_key_combinations() {
        for bits in 0u8..16 {
            let mut input = InputState::default();
            input.up = bits & 1 != 0;
            input.left = bits & 2 != 0;
            input.down = bits & 4 != 0;
            input.right = bits & 8 != 0;
            let intent = movement_intent(&input);
            assert!(intent.length() <= 1.0 + 1e-6, "bits {bits:04b}: {intent}");

            let vertical_cancels = input.up == input.down;
            let horizontal_cancels = input.left == input.right;
            if vertical_cancels {
                assert_eq!(intent.y, 0.0);
            }
            if horizontal_cancels {
                assert_eq!(intent.x, 0.0);
            }
            if vertical_cancels && horizontal_cancels {
                assert_eq!(intent, Vec2::ZERO);
            } else {
                assert!((intent.length() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn intent_axes_point_screen_down_and_right() {
        assert_eq!(movement_intent(&input_with(&[Key::W])), Vec2::new(0.0, -1.0));
        assert_eq!(movement_intent(&input_with(&[Key::S])), Vec2::new(0.0, 1.0));
        assert_eq!(movement_intent(&input_with(&[Key::A])), Vec2::new(-1.0, 0.0));
        assert_eq!(movement_intent(&input_with(&[Key::D])), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn holding_right_moves_one_pixel_per_step() {
        let mut world = default_world();
        world.step(&input_with(&[Key::D]), STEP_MS);
        assert_eq!(world.player.x, 391);
        assert_eq!(world.player.y, 290);
    }

    #[test]
    fn negative_displacement_truncates_toward_zero() {
        let mut world = default_world();
        world.step(&input_with(&[Key::A, Key::W]), STEP_MS);
        assert_eq!((world.player.x, world.player.y), (389, 289));
    }

    #[test]
    fn no_keys_leaves_player_in_place() {
        let mut world = default_world();
        let before = world.player;
        for _ in 0..10 {
            world.step(&InputState::default(), STEP_MS);
        }
        assert_eq!(world.player, before);
    }

    #[test]
    fn corner_is_sticky() {
        let mut world = default_world();
        world.player.x = world.map.x;
        world.player.y = world.map.y;

        let input = input_with(&[Key::W, Key::A]);
        for _ in 0..500 {
            world.step(&input, STEP_MS);
            assert_eq!((world.player.x, world.player.y), (250, 150));
        }
    }

    #[test]
    fn player_stays_inside_map() {
        let mut world = default_world();
        let moves: [&[Key]; 4] = [&[Key::D, Key::S], &[Key::A], &[Key::W, Key::D], &[Key::S]];
        for keys in moves {
            let input = input_with(keys);
            for _ in 0..400 {
                world.step(&input, STEP_MS);
                assert!(world.map.contains_rect(&world.player), "{:?}", world.player);
            }
        }
        // last leg held "down" long enough to pin against the bottom edge
        assert_eq!(world.player.bottom(), world.map.bottom());
    }

    #[test]
    fn huge_speed_clamps_to_far_edge() {
        let mut world = World::layout(800, 600, 20, 1.0e12);
        world.step(&input_with(&[Key::D, Key::W]), STEP_MS);
        assert_eq!(world.player.right(), world.map.right());
        assert_eq!(world.player.y, world.map.y);

        world.step(&input_with(&[Key::A, Key::S]), STEP_MS);
        assert_eq!(world.player.x, world.map.x);
        assert_eq!(world.player.bottom(), world.map.bottom());
    }

    #[test]
    fn oversized_player_pins_to_map_origin() {
        let mut world = World::layout(100, 100, 80, 0.1);
        world.step(&input_with(&[Key::D]), STEP_MS);
        assert_eq!(world.player.x, world.map.x);
    }
}
