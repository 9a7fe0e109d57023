//! The action catalog: every definition a combatant can draw from.
//!
//! Definitions are data, not code; hosts ship their own catalog as a RON
//! document or start from [`ActionCatalog::standard`] and tweak it.

use combat_core::{ActionDefinition, ActionKind, ActionParams, ItemKind};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// An ordered collection of action definitions.
///
/// Order matters: AI planning and UI listing both walk the catalog front
/// to back, so earlier entries win score ties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionCatalog {
    actions: Vec<ActionDefinition>,
}

impl ActionCatalog {
    pub fn new(actions: Vec<ActionDefinition>) -> Self {
        Self { actions }
    }

    /// The standard soldier action set.
    pub fn standard() -> Self {
        Self::new(vec![
            always_active(ActionDefinition::new(ActionKind::Move, "Move").with_binding("m")),
            always_active(ActionDefinition::new(ActionKind::Rotate, "Turn")),
            always_active(ActionDefinition::new(ActionKind::Rotate360, "Look Around").with_binding("l")),
            always_active(ActionDefinition::new(ActionKind::Interact, "Pick Up").with_binding("g")),
            ActionDefinition::new(ActionKind::MeleeAttack, "Strike")
                .with_binding("f")
                .with_params(ActionParams {
                    required_item: Some(ItemKind::MeleeWeapon),
                    ..Default::default()
                }),
            ActionDefinition::new(ActionKind::RangedAttack, "Shoot")
                .with_binding("f")
                .with_params(ActionParams {
                    range: 8,
                    required_item: Some(ItemKind::RangedWeapon),
                    ..Default::default()
                }),
            ActionDefinition::new(ActionKind::Throw, "Throw")
                .with_binding("t")
                .with_params(ActionParams {
                    range: 6,
                    required_item: Some(ItemKind::Grenade),
                    ..Default::default()
                }),
            ActionDefinition::new(ActionKind::Explode, "Frag Grenade")
                .with_binding("t")
                .with_params(ActionParams {
                    range: 6,
                    explosion_radius: 2,
                    turns_until_explode: 2,
                    required_item: Some(ItemKind::Grenade),
                    ..Default::default()
                }),
        ])
    }

    /// Parses a catalog from a RON document.
    pub fn from_ron(content: &str) -> Result<Self> {
        ron::from_str(content)
            .map_err(|e| RuntimeError::Catalog(format!("failed to parse catalog RON: {e}")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDefinition> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Looks an action up by its display name.
    pub fn by_name(&self, name: &str) -> Result<&ActionDefinition> {
        self.actions
            .iter()
            .find(|def| def.name == name)
            .ok_or_else(|| RuntimeError::UnknownAction(name.to_string()))
    }

    /// All definitions of the given kind, in catalog order.
    pub fn of_kind(&self, kind: ActionKind) -> impl Iterator<Item = &ActionDefinition> {
        self.actions.iter().filter(move |def| def.kind == kind)
    }
}

impl Default for ActionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn always_active(mut def: ActionDefinition) -> ActionDefinition {
    def.always_active = true;
    def
}
