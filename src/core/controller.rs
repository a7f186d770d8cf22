/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Back,
        Direction::Left,
        Direction::Right,
    ];
}

/// Controller - answers which directions are held this tick
pub trait Controller {
    /// Check if direction is currently held
    fn is_down(&self, direction: Direction) -> bool;

    /// Forward minus back, in {-1, 0, 1}
    fn forward_axis(&self) -> f32 {
        axis(self.is_down(Direction::Forward), self.is_down(Direction::Back))
    }

    /// Right minus left, in {-1, 0, 1}
    fn lateral_axis(&self) -> f32 {
        axis(self.is_down(Direction::Right), self.is_down(Direction::Left))
    }
}

const fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Latched key state. Last write before a tick wins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Forward => self.forward = held,
            Direction::Back => self.back = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn press(&mut self, direction: Direction) {
        self.set(direction, true);
    }

    pub fn release(&mut self, direction: Direction) {
        self.set(direction, false);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Controller for InputState {
    fn is_down(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.forward,
            Direction::Back => self.back,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}
