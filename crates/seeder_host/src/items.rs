//! Host item model: item kinds, enchantments, and item stacks.
//!
//! Identifiers are resolved against built-in catalogs. Resolution is
//! case-insensitive and fails soft: an unknown identifier is `None`, never
//! an error, so callers can skip bad configuration entries.

use serde::{Deserialize, Serialize};

/// Item-type identifiers the host recognizes, sorted for binary search.
/// Canonical form is lowercase snake_case.
const ITEM_CATALOG: &[&str] = &[
    "chainmail_boots",
    "chainmail_chestplate",
    "chainmail_helmet",
    "chainmail_leggings",
    "coal_ore",
    "copper_ore",
    "diamond_axe",
    "diamond_boots",
    "diamond_chestplate",
    "diamond_helmet",
    "diamond_hoe",
    "diamond_leggings",
    "diamond_ore",
    "diamond_pickaxe",
    "diamond_shovel",
    "diamond_sword",
    "emerald_ore",
    "gold_ore",
    "golden_axe",
    "golden_boots",
    "golden_chestplate",
    "golden_helmet",
    "golden_hoe",
    "golden_leggings",
    "golden_pickaxe",
    "golden_shovel",
    "golden_sword",
    "iron_axe",
    "iron_boots",
    "iron_chestplate",
    "iron_helmet",
    "iron_hoe",
    "iron_leggings",
    "iron_ore",
    "iron_pickaxe",
    "iron_shovel",
    "iron_sword",
    "lapis_ore",
    "leather_boots",
    "leather_chestplate",
    "leather_helmet",
    "leather_leggings",
    "netherite_axe",
    "netherite_boots",
    "netherite_chestplate",
    "netherite_helmet",
    "netherite_hoe",
    "netherite_leggings",
    "netherite_pickaxe",
    "netherite_shovel",
    "netherite_sword",
    "redstone_ore",
    "stone",
    "stone_axe",
    "stone_hoe",
    "stone_pickaxe",
    "stone_shovel",
    "stone_sword",
    "wooden_axe",
    "wooden_hoe",
    "wooden_pickaxe",
    "wooden_shovel",
    "wooden_sword",
];

/// Enchantment identifiers with their declared maximum levels.
const ENCHANTMENT_CATALOG: &[(&str, u32)] = &[
    ("efficiency", 5),
    ("fire_aspect", 2),
    ("fortune", 3),
    ("looting", 3),
    ("mending", 1),
    ("power", 5),
    ("protection", 4),
    ("sharpness", 5),
    ("silk_touch", 1),
    ("thorns", 3),
    ("unbreaking", 3),
];

/// A validated item-type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKind {
    id: String,
}

impl ItemKind {
    /// Resolves an identifier against the item catalog.
    ///
    /// Accepts any casing (`DIAMOND_ORE`, `diamond_ore`); returns `None`
    /// for identifiers the host does not recognize.
    pub fn resolve(identifier: &str) -> Option<Self> {
        let canonical = identifier.trim().to_ascii_lowercase();
        ITEM_CATALOG
            .binary_search(&canonical.as_str())
            .ok()
            .map(|_| Self { id: canonical })
    }

    /// Canonical (lowercase) identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A validated enchantment with its declared maximum level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enchantment {
    id: String,
    max_level: u32,
}

impl Enchantment {
    /// Resolves an identifier against the enchantment catalog.
    pub fn resolve(identifier: &str) -> Option<Self> {
        let canonical = identifier.trim().to_ascii_lowercase();
        ENCHANTMENT_CATALOG
            .iter()
            .find(|(id, _)| *id == canonical)
            .map(|(id, max_level)| Self {
                id: (*id).to_string(),
                // Catalog entries keep max_level >= 1; clamp defensively so
                // level draws in [1, max] are always valid.
                max_level: (*max_level).max(1),
            })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Declared maximum level, always >= 1.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }
}

/// An item stack: a kind, a count, and any applied enchantments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub count: u32,
    enchants: Vec<(Enchantment, u32)>,
}

impl ItemStack {
    pub fn new(kind: ItemKind, count: u32) -> Self {
        Self {
            kind,
            count,
            enchants: Vec::new(),
        }
    }

    /// Applies an enchantment at the given level.
    ///
    /// Force-apply semantics: no compatibility checks, no level capping,
    /// and re-applying an enchantment overwrites its previous level.
    pub fn apply_enchant(&mut self, enchant: Enchantment, level: u32) {
        if let Some(existing) = self.enchants.iter_mut().find(|(e, _)| e.id() == enchant.id()) {
            existing.1 = level;
        } else {
            self.enchants.push((enchant, level));
        }
    }

    pub fn enchants(&self) -> &[(Enchantment, u32)] {
        &self.enchants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_catalog_is_sorted() {
        let mut sorted = ITEM_CATALOG.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ITEM_CATALOG);
    }

    #[test]
    fn resolve_accepts_any_casing() {
        assert_eq!(
            ItemKind::resolve("DIAMOND_ORE").unwrap().id(),
            "diamond_ore"
        );
        assert_eq!(ItemKind::resolve("diamond_ore").unwrap().id(), "diamond_ore");
        assert_eq!(ItemKind::resolve(" Stone ").unwrap().id(), "stone");
    }

    #[test]
    fn resolve_rejects_unknown_identifiers() {
        assert!(ItemKind::resolve("UNOBTAINIUM_ORE").is_none());
        assert!(ItemKind::resolve("").is_none());
    }

    #[test]
    fn enchantment_resolution_and_max_levels() {
        let sharpness = Enchantment::resolve("SHARPNESS").unwrap();
        assert_eq!(sharpness.id(), "sharpness");
        assert_eq!(sharpness.max_level(), 5);

        let mending = Enchantment::resolve("mending").unwrap();
        assert_eq!(mending.max_level(), 1);

        assert!(Enchantment::resolve("curse_of_typos").is_none());
    }

    #[test]
    fn all_catalog_max_levels_at_least_one() {
        for (id, _) in ENCHANTMENT_CATALOG {
            assert!(Enchantment::resolve(id).unwrap().max_level() >= 1);
        }
    }

    #[test]
    fn apply_enchant_overwrites_existing_level() {
        let mut stack = ItemStack::new(ItemKind::resolve("iron_sword").unwrap(), 1);
        let sharpness = Enchantment::resolve("sharpness").unwrap();

        stack.apply_enchant(sharpness.clone(), 2);
        stack.apply_enchant(sharpness, 5);

        assert_eq!(stack.enchants().len(), 1);
        assert_eq!(stack.enchants()[0].1, 5);
    }

    #[test]
    fn force_apply_allows_over_max_levels() {
        // Levels above the declared max are the synthesizer's concern, not
        // the stack's.
        let mut stack = ItemStack::new(ItemKind::resolve("iron_sword").unwrap(), 1);
        let mending = Enchantment::resolve("mending").unwrap();
        stack.apply_enchant(mending, 10);
        assert_eq!(stack.enchants()[0].1, 10);
    }
}
