//! Per-occupant visual capabilities: where each occupant's animation strip
//! lives on the sprite sheet and how many frames it has.

use crate::common::Occupant;

/// Edge length of one frame on the sprite sheet.
pub const SHEET_TILE: u32 = 40;
/// Ticks each animation frame stays on screen.
pub const ANIMATION_PERIOD: u64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteStrip {
    pub sheet_x: u32,
    pub sheet_y: u32,
    pub frames: u32,
    /// Terminal stand-in for each frame of the strip.
    pub glyphs: &'static [char],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

static EMPTY: SpriteStrip = SpriteStrip {
    sheet_x: 0,
    sheet_y: 0,
    frames: 1,
    glyphs: &['.'],
};
static PLAYER: SpriteStrip = SpriteStrip {
    sheet_x: 0,
    sheet_y: 200,
    frames: 3,
    glyphs: &['P', 'p', 'P'],
};
static OPPONENT: SpriteStrip = SpriteStrip {
    sheet_x: 0,
    sheet_y: 160,
    frames: 3,
    glyphs: &['O', 'o', 'O'],
};

impl Occupant {
    pub fn sprite(self) -> &'static SpriteStrip {
        match self {
            Occupant::Empty => &EMPTY,
            Occupant::Player => &PLAYER,
            Occupant::Opponent => &OPPONENT,
        }
    }

    /// Whether the occupant's sprite is animated.
    pub fn is_animated(self) -> bool {
        self.sprite().frames > 1
    }
}

/// Sheet rectangle to draw for `occupant` at frame counter `tick`.
pub fn frame_rect(occupant: Occupant, tick: u64) -> SheetRect {
    let strip = occupant.sprite();
    let frame = (tick / ANIMATION_PERIOD) % u64::from(strip.frames);
    SheetRect {
        x: strip.sheet_x + frame as u32 * SHEET_TILE,
        y: strip.sheet_y,
        width: SHEET_TILE,
        height: SHEET_TILE,
    }
}

/// Terminal glyph for the frame `frame_rect` selects at `tick`.
pub fn glyph_at(occupant: Occupant, tick: u64) -> char {
    let strip = occupant.sprite();
    let rect = frame_rect(occupant, tick);
    let frame = ((rect.x - strip.sheet_x) / SHEET_TILE) as usize;
    strip.glyphs.get(frame).copied().unwrap_or('?')
}
