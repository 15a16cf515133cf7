//! Per-side bookkeeping: which pieces are still in play, which were captured,
//! and whether the side is currently in check.

use crate::game_state::xiangqi_types::{Color, PieceId};

/// Set of piece handles packed into a bitmask. A game never creates more
/// than 32 pieces, so one bit per handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceSet(u32);

impl PieceSet {
    pub const MAX_PIECES: usize = 32;

    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn contains(self, id: PieceId) -> bool {
        (self.0 & (1u32 << id.0)) != 0
    }

    /// Returns `true` when `id` was not already present.
    #[inline]
    pub fn insert(&mut self, id: PieceId) -> bool {
        let fresh = !self.contains(id);
        self.0 |= 1u32 << id.0;
        fresh
    }

    /// Returns `true` when `id` was present.
    #[inline]
    pub fn remove(&mut self, id: PieceId) -> bool {
        let present = self.contains(id);
        self.0 &= !(1u32 << id.0);
        present
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> PieceSetIter {
        PieceSetIter(self.0)
    }
}

impl IntoIterator for PieceSet {
    type Item = PieceId;
    type IntoIter = PieceSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending handles of a `PieceSet`.
pub struct PieceSetIter(u32);

impl Iterator for PieceSetIter {
    type Item = PieceId;

    fn next(&mut self) -> Option<PieceId> {
        if self.0 == 0 {
            return None;
        }
        let id = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(PieceId(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    active: PieceSet,
    inactive: PieceSet,
    in_check: bool,
}

impl Player {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            active: PieceSet::empty(),
            inactive: PieceSet::empty(),
            in_check: false,
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn active(&self) -> PieceSet {
        self.active
    }

    #[inline]
    pub const fn inactive(&self) -> PieceSet {
        self.inactive
    }

    #[inline]
    pub const fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn set_in_check(&mut self, in_check: bool) {
        self.in_check = in_check;
    }

    /// Register a freshly created piece. Only used while setting up a game.
    pub(crate) fn enlist(&mut self, id: PieceId) {
        self.active.insert(id);
    }

    /// Move `id` from the active to the inactive set. Returns `false` (and
    /// changes nothing) if the piece was not active.
    pub fn capture(&mut self, id: PieceId) -> bool {
        if !self.active.remove(id) {
            return false;
        }
        self.inactive.insert(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_set_iterates_ascending() {
        let mut set = PieceSet::empty();
        assert!(set.insert(PieceId(31)));
        assert!(set.insert(PieceId(0)));
        assert!(set.insert(PieceId(7)));
        assert!(!set.insert(PieceId(7)));
        assert_eq!(set.len(), 3);
        let ids: Vec<PieceId> = set.iter().collect();
        assert_eq!(ids, vec![PieceId(0), PieceId(7), PieceId(31)]);
        assert!(set.remove(PieceId(7)));
        assert!(!set.remove(PieceId(7)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn capture_moves_piece_to_inactive_exactly_once() {
        let mut player = Player::new(Color::Black);
        player.enlist(PieceId(16));
        player.enlist(PieceId(17));

        assert!(player.capture(PieceId(17)));
        assert!(!player.active().contains(PieceId(17)));
        assert!(player.inactive().contains(PieceId(17)));

        assert!(!player.capture(PieceId(17)));
        assert_eq!(player.inactive().len(), 1);
        assert_eq!(player.active().len(), 1);
    }
}
