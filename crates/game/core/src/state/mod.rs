//! Mutable combat world state.
//!
//! `CombatState` is the single shared resource the action tree mutates.
//! Validation reads it; effects write it; the stat ledger is only charged
//! at each action node's Complete phase.

use crate::grid::{Cell, CompassDir};
use crate::stats::StatSheet;

// ============================================================================
// Identity
// ============================================================================

/// Stable identifier for an actor on the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Which side an actor fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Faction {
    Player,
    Enemy,
    Neutral,
}

impl Faction {
    pub fn is_hostile_to(self, other: Faction) -> bool {
        matches!(
            (self, other),
            (Faction::Player, Faction::Enemy) | (Faction::Enemy, Faction::Player)
        )
    }
}

// ============================================================================
// Items
// ============================================================================

/// Coarse item classification used by action requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    MeleeWeapon,
    RangedWeapon,
    Grenade,
    Loot,
}

/// A carryable item. Weight multiplies item-based action costs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub weight: i64,
    pub damage: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, weight: i64, damage: i64) -> Self {
        Self {
            name: name.into(),
            kind,
            weight,
            damage,
        }
    }
}

// ============================================================================
// Actor State
// ============================================================================

/// Everything the action core tracks per actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub cell: Cell,
    pub facing: CompassDir,
    pub faction: Faction,
    pub stats: StatSheet,
    pub equipped: Option<Item>,
    pub inventory: Vec<Item>,
}

impl ActorState {
    pub fn new(cell: Cell, facing: CompassDir, faction: Faction, stats: StatSheet) -> Self {
        Self {
            cell,
            facing,
            faction,
            stats,
            equipped: None,
            inventory: Vec::new(),
        }
    }

    pub fn with_equipped(mut self, item: Item) -> Self {
        self.equipped = Some(item);
        self
    }

    /// The equipped item when it matches `kind`.
    pub fn equipped_of_kind(&self, kind: ItemKind) -> Option<&Item> {
        self.equipped.as_ref().filter(|item| item.kind == kind)
    }

    pub fn is_alive(&self) -> bool {
        self.stats
            .stat(crate::stats::StatKind::Health)
            .is_none_or(|hp| !hp.is_depleted())
    }
}

// ============================================================================
// Combat State
// ============================================================================

/// The mutable battlefield: actors plus loose items on the ground.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    actors: std::collections::BTreeMap<ActorId, ActorState>,
    loose_items: std::collections::BTreeMap<Cell, Item>,
}

impl CombatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_actor(&mut self, id: ActorId, actor: ActorState) {
        self.actors.insert(id, actor);
    }

    pub fn remove_actor(&mut self, id: ActorId) -> Option<ActorState> {
        self.actors.remove(&id)
    }

    pub fn actor(&self, id: ActorId) -> Option<&ActorState> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut ActorState> {
        self.actors.get_mut(&id)
    }

    /// The living actor standing on `cell`, if any.
    pub fn actor_at(&self, cell: Cell) -> Option<(ActorId, &ActorState)> {
        self.actors
            .iter()
            .find(|(_, a)| a.cell == cell && a.is_alive())
            .map(|(&id, a)| (id, a))
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.actor_at(cell).is_some()
    }

    /// Living actors hostile to `id`, in id order.
    pub fn hostiles_of(&self, id: ActorId) -> Vec<(ActorId, &ActorState)> {
        let Some(me) = self.actor(id) else {
            return Vec::new();
        };
        self.actors
            .iter()
            .filter(|&(&other, a)| other != id && a.is_alive())
            .filter(|(_, a)| me.faction.is_hostile_to(a.faction))
            .map(|(&other, a)| (other, a))
            .collect()
    }

    pub fn place_item(&mut self, cell: Cell, item: Item) {
        self.loose_items.insert(cell, item);
    }

    pub fn item_at(&self, cell: Cell) -> Option<&Item> {
        self.loose_items.get(&cell)
    }

    pub fn take_item(&mut self, cell: Cell) -> Option<Item> {
        self.loose_items.remove(&cell)
    }

    /// Cells currently holding a loose item, in cell order.
    pub fn item_cells(&self) -> Vec<Cell> {
        self.loose_items.keys().copied().collect()
    }
}
