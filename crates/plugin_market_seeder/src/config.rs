//! Seeder configuration.
//!
//! Loaded once at startup and read-only afterwards. Keys use kebab-case to
//! match the config-file convention; every key has a default so an empty
//! table is a valid configuration.

use serde::{Deserialize, Serialize};

fn default_interval() -> u64 {
    10
}

fn default_categories_order() -> Vec<String> {
    vec!["ores".to_string(), "armor".to_string(), "tools".to_string()]
}

fn default_ores() -> Vec<String> {
    [
        "COAL_ORE",
        "IRON_ORE",
        "COPPER_ORE",
        "GOLD_ORE",
        "REDSTONE_ORE",
        "LAPIS_ORE",
        "DIAMOND_ORE",
        "EMERALD_ORE",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_armor() -> Vec<String> {
    [
        "IRON_HELMET",
        "IRON_CHESTPLATE",
        "IRON_LEGGINGS",
        "IRON_BOOTS",
        "DIAMOND_HELMET",
        "DIAMOND_CHESTPLATE",
        "DIAMOND_LEGGINGS",
        "DIAMOND_BOOTS",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_tools() -> Vec<String> {
    [
        "IRON_PICKAXE",
        "IRON_AXE",
        "IRON_SHOVEL",
        "IRON_SWORD",
        "DIAMOND_PICKAXE",
        "DIAMOND_AXE",
        "DIAMOND_SHOVEL",
        "DIAMOND_SWORD",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_count() -> u32 {
    1
}

fn default_random_enchants() -> bool {
    true
}

fn default_possible_enchants() -> Vec<String> {
    [
        "SHARPNESS",
        "UNBREAKING",
        "MENDING",
        "EFFICIENCY",
        "PROTECTION",
        "THORNS",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_marketplace_component() -> String {
    "auction_house".to_string()
}

/// Price bounds for generated listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 50.0,
            max: 500.0,
        }
    }
}

/// Configuration for the market seeder plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SeederConfig {
    /// Seeding period in minutes.
    pub interval: u64,
    /// Order of category candidates; one is chosen uniformly per cycle.
    pub categories_order: Vec<String>,
    /// Candidate item identifiers per category.
    pub ores: Vec<String>,
    pub armor: Vec<String>,
    pub tools: Vec<String>,
    /// Listing quantity.
    pub default_count: u32,
    /// Price bounds; max is corrected to min + 1 when not above min.
    pub price_range: PriceRange,
    /// Whether armor and tools may receive random enchantments.
    pub random_enchants: bool,
    /// Enchantment identifier pool for random enchantments.
    pub possible_enchants: Vec<String>,
    /// Seed for the cycle RNG; omit for entropy-based seeding.
    pub rng_seed: Option<u64>,
    /// Registry name of the marketplace component to publish to.
    pub marketplace_component: String,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            categories_order: default_categories_order(),
            ores: default_ores(),
            armor: default_armor(),
            tools: default_tools(),
            default_count: default_count(),
            price_range: PriceRange::default(),
            random_enchants: default_random_enchants(),
            possible_enchants: default_possible_enchants(),
            rng_seed: None,
            marketplace_component: default_marketplace_component(),
        }
    }
}

impl SeederConfig {
    /// Validates the configuration for consistency.
    ///
    /// Note that a reversed price range is deliberately *not* an error:
    /// the price generator silently corrects it.
    pub fn validate(&self) -> Result<(), String> {
        if self.interval == 0 {
            return Err("interval must be at least 1 minute".to_string());
        }
        if self.default_count == 0 {
            return Err("default-count must be at least 1".to_string());
        }
        if self.marketplace_component.is_empty() {
            return Err("marketplace-component cannot be empty".to_string());
        }
        if !self.price_range.min.is_finite() || !self.price_range.max.is_finite() {
            return Err("price-range bounds must be finite".to_string());
        }
        if self.price_range.min < 0.0 {
            return Err("price-range.min cannot be negative".to_string());
        }
        Ok(())
    }
}
