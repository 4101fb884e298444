//! The fixed entity roster.
//!
//! Every sprite subject the generator knows about, with its native raster
//! size, its ordered animation list, and its drawer. Roster order is
//! normative: it fixes the row order of the contact sheet.

use crate::drawers::{self, DrawFn};

/// How frames of an entity are addressed on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Multi-frame animations, persisted as `anim_index.png`.
    Animated,
    /// Single-frame stills (tiles, background), persisted as `name.png`.
    Static,
}

/// One named animation and its fixed frame count.
#[derive(Debug, Clone, Copy)]
pub struct AnimationSpec {
    pub name: &'static str,
    pub frames: usize,
}

impl AnimationSpec {
    const fn new(name: &'static str, frames: usize) -> Self {
        Self { name, frames }
    }
}

/// One sprite subject.
#[derive(Debug, Clone, Copy)]
pub struct EntityDesc {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub kind: EntityKind,
    pub animations: &'static [AnimationSpec],
    pub draw: DrawFn,
}

const PLAYER_ANIMS: &[AnimationSpec] = &[
    AnimationSpec::new("idle", 4),
    AnimationSpec::new("run", 6),
    AnimationSpec::new("jump", 2),
    AnimationSpec::new("fall", 2),
    AnimationSpec::new("hurt", 3),
];

const SLIME_ANIMS: &[AnimationSpec] = &[
    AnimationSpec::new("walk", 4),
    AnimationSpec::new("squish", 2),
];

const COIN_ANIMS: &[AnimationSpec] = &[
    AnimationSpec::new("idle", 6),
    AnimationSpec::new("collect", 4),
];

const GOAL_ANIMS: &[AnimationSpec] = &[AnimationSpec::new("idle", 2)];

const TILE_ANIMS: &[AnimationSpec] = &[
    AnimationSpec::new("grass_top", 1),
    AnimationSpec::new("dirt", 1),
    AnimationSpec::new("grass_left", 1),
    AnimationSpec::new("grass_right", 1),
    AnimationSpec::new("wood_left", 1),
    AnimationSpec::new("wood_mid", 1),
    AnimationSpec::new("wood_right", 1),
];

const BG_ANIMS: &[AnimationSpec] = &[
    AnimationSpec::new("cloud_left", 1),
    AnimationSpec::new("cloud_right", 1),
    AnimationSpec::new("bush", 1),
];

/// The full entity roster, in generation order.
pub fn roster() -> Vec<EntityDesc> {
    vec![
        EntityDesc {
            name: "player",
            width: 16,
            height: 32,
            kind: EntityKind::Animated,
            animations: PLAYER_ANIMS,
            draw: drawers::player::draw,
        },
        EntityDesc {
            name: "slime",
            width: 16,
            height: 16,
            kind: EntityKind::Animated,
            animations: SLIME_ANIMS,
            draw: drawers::slime::draw,
        },
        EntityDesc {
            name: "coin",
            width: 16,
            height: 16,
            kind: EntityKind::Animated,
            animations: COIN_ANIMS,
            draw: drawers::coin::draw,
        },
        EntityDesc {
            name: "goal",
            width: 16,
            height: 32,
            kind: EntityKind::Animated,
            animations: GOAL_ANIMS,
            draw: drawers::goal::draw,
        },
        EntityDesc {
            name: "tiles",
            width: 16,
            height: 16,
            kind: EntityKind::Static,
            animations: TILE_ANIMS,
            draw: drawers::tiles::draw,
        },
        EntityDesc {
            name: "bg",
            width: 16,
            height: 16,
            kind: EntityKind::Static,
            animations: BG_ANIMS,
            draw: drawers::bg::draw,
        },
    ]
}
