use rand::Rng;

use crate::border::Bounds;
use crate::geometry::Point;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Apple {
    pub position: Point,
}

impl Apple {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

/// Live apples on the field, capped at `capacity`.
#[derive(Clone, Debug)]
pub struct AppleField {
    apples: Vec<Apple>,
    capacity: usize,
    inset: u32,
}

impl AppleField {
    pub fn new(capacity: usize, inset: u32) -> Self {
        Self {
            apples: Vec::new(),
            capacity,
            inset,
        }
    }

    pub fn apples(&self) -> &[Apple] {
        &self.apples
    }

    pub fn len(&self) -> usize {
        self.apples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.apples.len() >= self.capacity
    }

    /// Places `apple` directly, ignoring the inset but not the cap.
    pub fn place(&mut self, apple: Apple) -> bool {
        if self.is_full() {
            return false;
        }
        self.apples.push(apple);
        true
    }

    /// Adds one apple on integer coordinates in `[inset, extent - inset]`
    /// on each axis. No-op when the field is full or too small for the inset.
    pub fn spawn<R: Rng + ?Sized>(&mut self, bounds: &Bounds, rng: &mut R) -> Option<Apple> {
        if self.is_full() {
            return None;
        }
        let min = self.inset;
        let max_x = bounds.width.checked_sub(self.inset)?;
        let max_y = bounds.height.checked_sub(self.inset)?;
        if max_x < min || max_y < min {
            return None;
        }

        let apple = Apple::new(
            rng.gen_range(min..=max_x) as f32,
            rng.gen_range(min..=max_y) as f32,
        );
        self.apples.push(apple);
        Some(apple)
    }

    /// Removes and returns every apple strictly closer than `radius` to `point`.
    pub fn consume_near(&mut self, point: Point, radius: f32) -> Vec<Apple> {
        let (eaten, kept): (Vec<Apple>, Vec<Apple>) = self
            .apples
            .drain(..)
            .partition(|apple| apple.position.distance(point) < radius);
        self.apples = kept;
        eaten
    }
}
