//! Per-frame region registry for pointer hit-testing.
//!
//! While drawing, the renderer registers each rectangle it paints together
//! with a [`Marker`] naming what it represents, outermost first (board, then
//! lanes, then cards). [`RegionFrame::hit_path`] walks that list in reverse
//! for a pointer position, yielding the innermost matches first, so resolving
//! "which column is the pointer over" is a scan along the hit path for the
//! first lane marker, wherever the pointer actually landed inside the lane.

use ratatui::layout::{Position, Rect};
use uuid::Uuid;

use crate::model::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Board,
    Lane(Column),
    Card(Uuid),
    Overlay,
}

#[derive(Debug, Default)]
pub struct RegionFrame {
    regions: Vec<(Rect, Marker)>,
}

impl RegionFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registrations. Called at the top of every draw.
    pub fn reset(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, rect: Rect, marker: Marker) {
        self.regions.push((rect, marker));
    }

    /// All markers whose region contains `at`, innermost first.
    pub fn hit_path(&self, at: Position) -> impl Iterator<Item = Marker> + '_ {
        self.regions
            .iter()
            .rev()
            .filter(move |(rect, _)| rect.contains(at))
            .map(|(_, marker)| *marker)
    }

    /// Walk the hit path until a lane marker is found.
    pub fn column_at(&self, at: Position) -> Option<Column> {
        self.hit_path(at).find_map(|marker| match marker {
            Marker::Lane(column) => Some(column),
            _ => None,
        })
    }

    /// Walk the hit path until a card marker is found.
    pub fn card_at(&self, at: Position) -> Option<Uuid> {
        self.hit_path(at).find_map(|marker| match marker {
            Marker::Card(id) => Some(id),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_lane() -> (RegionFrame, Uuid) {
        // Board 0,0 80x24; one lane at 0,1 20x23; one card inside it.
        let mut regions = RegionFrame::new();
        let card = Uuid::new_v4();
        regions.register(Rect::new(0, 0, 80, 24), Marker::Board);
        regions.register(Rect::new(0, 1, 20, 23), Marker::Lane(Column::Ordered));
        regions.register(Rect::new(1, 2, 18, 2), Marker::Card(card));
        (regions, card)
    }

    #[test]
    fn hit_path_is_innermost_first() {
        let (regions, card) = frame_with_lane();
        let path: Vec<Marker> = regions.hit_path(Position::new(2, 3)).collect();
        assert_eq!(
            path,
            vec![
                Marker::Card(card),
                Marker::Lane(Column::Ordered),
                Marker::Board
            ]
        );
    }

    #[test]
    fn column_resolves_through_a_card_hit() {
        let (regions, _) = frame_with_lane();
        // Pointer on a card still resolves to the enclosing lane.
        assert_eq!(
            regions.column_at(Position::new(2, 3)),
            Some(Column::Ordered)
        );
    }

    #[test]
    fn column_resolves_on_bare_lane_space() {
        let (regions, _) = frame_with_lane();
        assert_eq!(
            regions.column_at(Position::new(5, 20)),
            Some(Column::Ordered)
        );
    }

    #[test]
    fn no_lane_on_the_path_resolves_to_none() {
        let (regions, _) = frame_with_lane();
        // Inside the board but outside every lane.
        assert_eq!(regions.column_at(Position::new(60, 3)), None);
        // Outside everything.
        assert_eq!(regions.column_at(Position::new(200, 200)), None);
    }

    #[test]
    fn card_at_finds_only_cards() {
        let (regions, card) = frame_with_lane();
        assert_eq!(regions.card_at(Position::new(2, 3)), Some(card));
        assert_eq!(regions.card_at(Position::new(5, 20)), None);
    }

    #[test]
    fn reset_clears_registrations() {
        let (mut regions, _) = frame_with_lane();
        regions.reset();
        assert_eq!(regions.column_at(Position::new(2, 3)), None);
    }
}
