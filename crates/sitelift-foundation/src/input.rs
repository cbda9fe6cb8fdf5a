//! Platform-neutral pointer input.
//!
//! The web adapter translates mouse and touch events into [`PointerEvent`]
//! before handing them to a carousel, so models never see `web-sys` types.

/// A position in CSS pixels relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl From<PointerEventKind> for PointerPhase {
    fn from(kind: PointerEventKind) -> Self {
        match kind {
            PointerEventKind::Down => PointerPhase::Start,
            PointerEventKind::Move => PointerPhase::Move,
            PointerEventKind::Up => PointerPhase::End,
            PointerEventKind::Cancel => PointerPhase::Cancel,
        }
    }
}

/// A single pointer sample, either from a mouse or from the first touch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            phase: kind.into(),
            position,
        }
    }

    /// Event carrying no meaningful position (release or cancellation).
    pub fn without_position(kind: PointerEventKind) -> Self {
        Self::new(kind, Point::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_kind() {
        let event = PointerEvent::new(PointerEventKind::Down, Point::new(3.0, 4.0));
        assert_eq!(event.phase, PointerPhase::Start);
        assert_eq!(
            PointerEvent::without_position(PointerEventKind::Cancel).phase,
            PointerPhase::Cancel
        );
    }
}
