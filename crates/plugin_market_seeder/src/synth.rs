//! Item synthesizer: turns configured candidate lists into concrete item
//! stacks, with optional random enchantments for armor and tools.
//!
//! Every function takes the RNG explicitly so cycles can be made
//! deterministic with a seeded generator.

use crate::config::SeederConfig;
use rand::Rng;
use seeder_host::{Enchantment, ItemKind, ItemStack};
use tracing::warn;

/// Category ordering used when the configured list is empty.
const DEFAULT_CATEGORY_ORDER: [&str; 3] = ["ores", "armor", "tools"];

/// Picks the cycle's category uniformly from the configured order.
pub fn pick_category<R: Rng>(rng: &mut R, order: &[String]) -> String {
    if order.is_empty() {
        let idx = rng.gen_range(0..DEFAULT_CATEGORY_ORDER.len());
        return DEFAULT_CATEGORY_ORDER[idx].to_string();
    }
    order[rng.gen_range(0..order.len())].clone()
}

/// Synthesizes zero or one item for the category.
///
/// Returns `None` for unknown categories, empty candidate lists, and
/// unresolvable identifiers; all are expected outcomes that skip the
/// cycle, not errors.
pub fn synthesize_item<R: Rng>(
    rng: &mut R,
    config: &SeederConfig,
    category: &str,
) -> Option<ItemStack> {
    let (candidates, enchantable) = match category.to_ascii_lowercase().as_str() {
        "ores" => (&config.ores, false),
        "armor" => (&config.armor, true),
        "tools" => (&config.tools, true),
        other => {
            warn!("Unknown item category in config: {}", other);
            return None;
        }
    };

    if candidates.is_empty() {
        return None;
    }

    let candidate = &candidates[rng.gen_range(0..candidates.len())];
    let Some(kind) = ItemKind::resolve(candidate) else {
        warn!("Unknown item identifier in config: {}", candidate);
        return None;
    };

    let mut item = ItemStack::new(kind, 1);
    if enchantable && config.random_enchants && rng.gen_bool(0.5) {
        apply_random_enchants(rng, &mut item, &config.possible_enchants);
    }
    Some(item)
}

/// Default enchantment pool, used when the configured pool is empty.
const DEFAULT_ENCHANT_POOL: [&str; 6] = [
    "sharpness",
    "unbreaking",
    "mending",
    "efficiency",
    "protection",
    "thorns",
];

/// Applies 1-3 random enchantments from the pool.
///
/// Each draw is independent; an unresolvable pool entry wastes that draw
/// rather than triggering a redraw. Levels are uniform in
/// `[1, max_level]`.
fn apply_random_enchants<R: Rng>(rng: &mut R, item: &mut ItemStack, pool: &[String]) {
    let owned_pool: Vec<String>;
    let pool: &[String] = if pool.is_empty() {
        owned_pool = DEFAULT_ENCHANT_POOL.iter().map(|s| s.to_string()).collect();
        &owned_pool
    } else {
        pool
    };

    let draws = rng.gen_range(1..=3);
    for _ in 0..draws {
        let identifier = &pool[rng.gen_range(0..pool.len())];
        let Some(enchant) = Enchantment::resolve(identifier) else {
            warn!("Unknown enchantment identifier in config: {}", identifier);
            continue;
        };
        let level = rng.gen_range(1..=enchant.max_level());
        item.apply_enchant(enchant, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn category_pick_respects_configured_order() {
        let mut rng = rng(1);
        let order = vec!["ores".to_string()];
        for _ in 0..20 {
            assert_eq!(pick_category(&mut rng, &order), "ores");
        }
    }

    #[test]
    fn category_pick_falls_back_when_order_empty() {
        let mut rng = rng(2);
        for _ in 0..50 {
            let category = pick_category(&mut rng, &[]);
            assert!(DEFAULT_CATEGORY_ORDER.contains(&category.as_str()));
        }
    }

    #[test]
    fn synthesized_items_come_from_the_candidate_list() {
        let mut config = SeederConfig::default();
        config.ores = vec!["STONE".to_string(), "IRON_ORE".to_string()];

        let mut rng = rng(3);
        for _ in 0..100 {
            let item = synthesize_item(&mut rng, &config, "ores").expect("non-empty list");
            assert!(matches!(item.kind.id(), "stone" | "iron_ore"));
            assert_eq!(item.count, 1);
        }
    }

    #[test]
    fn empty_candidate_list_produces_nothing() {
        let mut config = SeederConfig::default();
        config.ores.clear();
        assert!(synthesize_item(&mut rng(4), &config, "ores").is_none());
    }

    #[test]
    fn unknown_category_produces_nothing() {
        let config = SeederConfig::default();
        assert!(synthesize_item(&mut rng(5), &config, "potions").is_none());
    }

    #[test]
    fn unresolvable_identifier_produces_nothing() {
        let mut config = SeederConfig::default();
        config.ores = vec!["UNOBTAINIUM_ORE".to_string()];
        assert!(synthesize_item(&mut rng(6), &config, "ores").is_none());
    }

    #[test]
    fn ores_are_never_enchanted() {
        let config = SeederConfig::default();
        let mut rng = rng(7);
        for _ in 0..200 {
            let item = synthesize_item(&mut rng, &config, "ores").unwrap();
            assert!(item.enchants().is_empty());
        }
    }

    #[test]
    fn enchant_counts_and_levels_stay_in_bounds() {
        let config = SeederConfig::default();
        let mut rng = rng(8);
        let mut saw_enchanted = false;
        for _ in 0..200 {
            let item = synthesize_item(&mut rng, &config, "tools").unwrap();
            assert!(item.enchants().len() <= 3);
            if !item.enchants().is_empty() {
                saw_enchanted = true;
            }
            for (enchant, level) in item.enchants() {
                assert!(*level >= 1);
                assert!(*level <= enchant.max_level());
            }
        }
        // With a fair coin over 200 cycles, enchanted tools must show up.
        assert!(saw_enchanted);
    }

    #[test]
    fn random_enchants_flag_disables_enchanting() {
        let mut config = SeederConfig::default();
        config.random_enchants = false;
        let mut rng = rng(9);
        for _ in 0..100 {
            let item = synthesize_item(&mut rng, &config, "armor").unwrap();
            assert!(item.enchants().is_empty());
        }
    }

    #[test]
    fn unresolvable_pool_entries_waste_the_draw() {
        let mut config = SeederConfig::default();
        config.possible_enchants = vec!["CURSE_OF_TYPOS".to_string()];
        let mut rng = rng(10);
        for _ in 0..100 {
            // Every draw hits the bad identifier, so no enchant is applied
            // and no redraw happens.
            let item = synthesize_item(&mut rng, &config, "tools").unwrap();
            assert!(item.enchants().is_empty());
        }
    }

    #[test]
    fn empty_pool_falls_back_to_builtin_pool() {
        let mut config = SeederConfig::default();
        config.possible_enchants.clear();
        let mut rng = rng(11);
        let mut saw_enchanted = false;
        for _ in 0..200 {
            let item = synthesize_item(&mut rng, &config, "tools").unwrap();
            for (enchant, _) in item.enchants() {
                saw_enchanted = true;
                assert!(DEFAULT_ENCHANT_POOL.contains(&enchant.id()));
            }
        }
        assert!(saw_enchanted);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let config = SeederConfig::default();
        let a: Vec<_> = {
            let mut rng = rng(42);
            (0..20)
                .map(|_| synthesize_item(&mut rng, &config, "tools").unwrap())
                .collect()
        };
        let b: Vec<_> = {
            let mut rng = rng(42);
            (0..20)
                .map(|_| synthesize_item(&mut rng, &config, "tools").unwrap())
                .collect()
        };
        assert_eq!(a, b);
    }
}
