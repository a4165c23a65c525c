use serde::Serialize;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PickUpOutcome {
    Ignored,
    Held(Concept),
    Released,
}

/// Cut-and-paste hand: at most one item picked up, or one item pasted on the target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct HoldState {
    held: Option<Concept>,
    pasted: Option<Concept>,
    cursor: Point,
}

impl HoldState {
    pub fn held(&self) -> Option<Concept> {
        self.held
    }

    pub fn pasted(&self) -> Option<Concept> {
        self.pasted
    }

    /// Latest pointer position, where the floating item is drawn.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn pick_up(&mut self, item: Concept) -> PickUpOutcome {
        if self.pasted.is_some() {
            return PickUpOutcome::Ignored;
        }
        if self.held == Some(item) {
            self.held = None;
            PickUpOutcome::Released
        } else {
            self.held = Some(item);
            PickUpOutcome::Held(item)
        }
    }

    pub fn track(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    /// Lets go of the held item for a drop attempt.
    pub fn take(&mut self) -> Option<Concept> {
        if self.pasted.is_some() {
            return None;
        }
        self.held.take()
    }

    pub fn paste(&mut self, item: Concept) {
        self.held = None;
        self.pasted = Some(item);
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.pasted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_the_same_item_twice_releases_it() {
        let mut hand = HoldState::default();

        assert_eq!(hand.pick_up("a"), PickUpOutcome::Held("a"));
        assert_eq!(hand.pick_up("a"), PickUpOutcome::Released);
        assert_eq!(hand.held(), None);
    }

    #[test]
    fn picking_another_item_swaps_it() {
        let mut hand = HoldState::default();

        hand.pick_up("a");
        assert_eq!(hand.pick_up("b"), PickUpOutcome::Held("b"));
        assert_eq!(hand.held(), Some("b"));
    }

    #[test]
    fn pasted_hand_refuses_new_items() {
        let mut hand = HoldState::default();
        hand.pick_up("a");
        hand.paste("a");

        assert_eq!(hand.held(), None);
        assert_eq!(hand.pick_up("b"), PickUpOutcome::Ignored);
        assert_eq!(hand.take(), None);
    }

    #[test]
    fn cursor_follows_the_pointer() {
        let mut hand = HoldState::default();
        hand.track(Point::new(3.0, 4.0));
        assert_eq!(hand.cursor(), Point::new(3.0, 4.0));
    }
}
