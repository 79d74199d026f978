//! Static registry of game variants.

use std::path::Path;

use crate::error::LoadError;
use crate::game::{BridgeGame, BridgeHonorsGame, Game};

/// Descriptor for a registered game variant.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Stable identifier (e.g. for CLI selection).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Cards per hand.
    pub hand_size: usize,
    /// Constructs the variant with its deck loaded from the given
    /// directory and shuffled with the given seed.
    pub build: fn(&Path, u64) -> Result<Box<dyn Game>, LoadError>,
}

/// Registration table. Slice order is the presentation order.
const VARIANTS: &[Variant] = &[
    Variant {
        id: "bridge",
        name: BridgeGame::NAME,
        hand_size: BridgeGame::HAND_SIZE,
        build: build_bridge,
    },
    Variant {
        id: "bridge-honors",
        name: BridgeHonorsGame::NAME,
        hand_size: BridgeHonorsGame::HAND_SIZE,
        build: build_bridge_honors,
    },
];

fn build_bridge(deck_dir: &Path, seed: u64) -> Result<Box<dyn Game>, LoadError> {
    Ok(Box::new(BridgeGame::new(deck_dir, seed)?))
}

fn build_bridge_honors(deck_dir: &Path, seed: u64) -> Result<Box<dyn Game>, LoadError> {
    Ok(Box::new(BridgeHonorsGame::new(deck_dir, seed)?))
}

/// Returns all registered variants in a stable order.
#[must_use]
pub const fn variants() -> &'static [Variant] {
    VARIANTS
}

/// Looks up a variant by identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static Variant> {
    VARIANTS.iter().find(|variant| variant.id == id)
}
