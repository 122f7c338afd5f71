use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, FromRepr};

pub const FINGER_COUNT: usize = 10;

/// Position on the abstract key grid. One unit is one key width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

#[inline(always)]
pub fn euclidean_dist(a: Pos, b: Pos) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

/// Fingers in keyboard order, left pinky through right pinky.
/// The numeric value doubles as the index into per-finger arrays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum Finger {
    LeftPinky = 0,
    LeftRing = 1,
    LeftMiddle = 2,
    LeftIndex = 3,
    LeftThumb = 4,
    RightThumb = 5,
    RightIndex = 6,
    RightMiddle = 7,
    RightRing = 8,
    RightPinky = 9,
}

impl Finger {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn hand(self) -> Hand {
        if (self as usize) < 5 {
            Hand::Left
        } else {
            Hand::Right
        }
    }
}

/// A physical key position with its assigned finger, before any character
/// is bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeySlot {
    pub finger: Finger,
    pub pos: Pos,
}

const fn slot(finger: Finger, x: f32, y: f32) -> KeySlot {
    KeySlot {
        finger,
        pos: Pos { x, y },
    }
}

use Finger::*;

/// Standard 30-key row-staggered grid: three rows of ten, hands split at
/// column five, index fingers covering the two center columns.
pub const STANDARD_SLOTS: [KeySlot; 30] = [
    // Top row
    slot(LeftPinky, 0.0, 0.0),
    slot(LeftRing, 1.0, 0.0),
    slot(LeftMiddle, 2.0, 0.0),
    slot(LeftIndex, 3.0, 0.0),
    slot(LeftIndex, 4.0, 0.0),
    slot(RightIndex, 5.0, 0.0),
    slot(RightIndex, 6.0, 0.0),
    slot(RightMiddle, 7.0, 0.0),
    slot(RightRing, 8.0, 0.0),
    slot(RightPinky, 9.0, 0.0),
    // Home row
    slot(LeftPinky, 0.2, 1.0),
    slot(LeftRing, 1.2, 1.0),
    slot(LeftMiddle, 2.2, 1.0),
    slot(LeftIndex, 3.2, 1.0),
    slot(LeftIndex, 4.2, 1.0),
    slot(RightIndex, 5.2, 1.0),
    slot(RightIndex, 6.2, 1.0),
    slot(RightMiddle, 7.2, 1.0),
    slot(RightRing, 8.2, 1.0),
    slot(RightPinky, 9.2, 1.0),
    // Bottom row
    slot(LeftPinky, 0.5, 2.0),
    slot(LeftRing, 1.5, 2.0),
    slot(LeftMiddle, 2.5, 2.0),
    slot(LeftIndex, 3.5, 2.0),
    slot(LeftIndex, 4.5, 2.0),
    slot(RightIndex, 5.5, 2.0),
    slot(RightIndex, 6.5, 2.0),
    slot(RightMiddle, 7.5, 2.0),
    slot(RightRing, 8.5, 2.0),
    slot(RightPinky, 9.5, 2.0),
];

/// The space bar. Both thumbs rest here; the right thumb presses it.
pub const SPACE_SLOT: KeySlot = slot(RightThumb, 4.5, 3.0);

/// Home-row slot index for each non-thumb finger.
pub const HOME_SLOTS: [(Finger, usize); 8] = [
    (LeftPinky, 10),
    (LeftRing, 11),
    (LeftMiddle, 12),
    (LeftIndex, 13),
    (RightIndex, 16),
    (RightMiddle, 17),
    (RightRing, 18),
    (RightPinky, 19),
];
