//! Keyboard state for the four movement directions plus the quit flag.
//!
//! Platform code feeds key transitions in; the simulator reads the
//! resulting flags once per fixed step.

/// Host-neutral key identity. Backends translate their own key codes into
/// this; anything the demo does not care about becomes `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::W => Some(Direction::Up),
            Key::A => Some(Direction::Left),
            Key::S => Some(Direction::Down),
            Key::D => Some(Direction::Right),
            Key::Escape | Key::Other => None,
        }
    }

    #[inline]
    pub fn is_cancel(self) -> bool {
        self == Key::Escape
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    quit: bool,
}

impl InputState {
    pub fn on_key_down(&mut self, key: Key) {
        if let Some(dir) = key.direction() {
            self.set(dir, true);
        }
    }

    /// Releases the direction bound to `key`. Releasing the cancel key
    /// raises the quit flag.
    pub fn on_key_up(&mut self, key: Key) {
        if key.is_cancel() {
            self.quit = true;
        }
        if let Some(dir) = key.direction() {
            self.set(dir, false);
        }
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Left => self.left,
            Direction::Down => self.down,
            Direction::Right => self.right,
        }
    }

    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    #[inline]
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    fn set(&mut self, dir: Direction, pressed: bool) {
        match dir {
            Direction::Up => self.up = pressed,
            Direction::Left => self.left = pressed,
            Direction::Down => self.down = pressed,
            Direction::Right => self.right = pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_toggle_direction() {
        let mut input = InputState::default();
        input.on_key_down(Key::D);
        assert!(input.is_pressed(Direction::Right));
        assert!(!input.is_pressed(Direction::Left));

        input.on_key_up(Key::D);
        assert!(!input.is_pressed(Direction::Right));
        assert!(!input.quit_requested());
    }

    #[test]
    fn each_key_maps_to_its_own_flag() {
        let mut input = InputState::default();
        input.on_key_down(Key::W);
        input.on_key_down(Key::A);
        assert!(input.up && input.left);
        assert!(!input.down && !input.right);

        input.on_key_down(Key::S);
        input.on_key_up(Key::W);
        assert!(!input.up && input.down && input.left);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut input = InputState::default();
        input.on_key_down(Key::Other);
        input.on_key_up(Key::Other);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn cancel_quits_on_release_only() {
        let mut input = InputState::default();
        input.on_key_down(Key::Escape);
        assert!(!input.quit_requested());

        input.on_key_up(Key::Escape);
        assert!(input.quit_requested());
    }
}
