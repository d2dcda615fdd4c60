//! Food catalog
//!
//! Fixed at construction and never mutated. Draws are uniform over entries,
//! so the healthy/unhealthy ratio in play is the catalog's own split.

use rand::Rng;

use super::state::{Category, FoodDefinition};
use crate::error::ConfigError;

/// Registry of every food that can fall
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<FoodDefinition>,
}

impl Catalog {
    /// Build a catalog. An empty one is a configuration error.
    pub fn new(definitions: Vec<FoodDefinition>) -> Result<Self, ConfigError> {
        if definitions.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { definitions })
    }

    /// The stock menu: fruit, vegetables and nuts against fast food, sweets and snacks
    pub fn standard() -> Self {
        use Category::{Healthy, Unhealthy};

        #[rustfmt::skip]
        let table: &[(&str, &str, Category, i32, u32)] = &[
            // Fruits
            ("Apple", "🍎", Healthy, 10, 52),
            ("Banana", "🍌", Healthy, 10, 89),
            ("Orange", "🍊", Healthy, 10, 47),
            ("Strawberry", "🍓", Healthy, 10, 32),
            ("Grapes", "🍇", Healthy, 10, 62),
            ("Watermelon", "🍉", Healthy, 10, 30),
            ("Pineapple", "🍍", Healthy, 10, 50),
            ("Peach", "🍑", Healthy, 10, 39),
            ("Kiwi", "🥝", Healthy, 10, 61),
            ("Mango", "🥭", Healthy, 10, 60),
            // Vegetables
            ("Carrot", "🥕", Healthy, 10, 41),
            ("Broccoli", "🥦", Healthy, 10, 34),
            ("Spinach", "🥬", Healthy, 10, 23),
            ("Tomato", "🍅", Healthy, 10, 18),
            ("Cucumber", "🥒", Healthy, 10, 16),
            ("Bell Pepper", "🫑", Healthy, 10, 31),
            ("Corn", "🌽", Healthy, 10, 86),
            ("Eggplant", "🍆", Healthy, 10, 25),
            ("Avocado", "🥑", Healthy, 10, 160),
            ("Potato", "🥔", Healthy, 10, 77),
            // Nuts & seeds
            ("Peanuts", "🥜", Healthy, 10, 567),
            ("Coconut", "🥥", Healthy, 10, 354),
            // Fast food
            ("Hamburger", "🍔", Unhealthy, -15, 354),
            ("Pizza", "🍕", Unhealthy, -15, 266),
            ("French Fries", "🍟", Unhealthy, -15, 365),
            ("Hot Dog", "🌭", Unhealthy, -15, 290),
            ("Taco", "🌮", Unhealthy, -15, 226),
            ("Burrito", "🌯", Unhealthy, -15, 326),
            ("Sandwich", "🥪", Unhealthy, -15, 250),
            // Desserts & sweets
            ("Ice Cream", "🍦", Unhealthy, -15, 207),
            ("Chocolate", "🍫", Unhealthy, -15, 546),
            ("Donut", "🍩", Unhealthy, -15, 452),
            ("Cookie", "🍪", Unhealthy, -15, 502),
            ("Cake", "🍰", Unhealthy, -15, 257),
            ("Pie", "🥧", Unhealthy, -15, 237),
            ("Candy", "🍬", Unhealthy, -15, 394),
            ("Lollipop", "🍭", Unhealthy, -15, 408),
            // Drinks & snacks
            ("Soda", "🥤", Unhealthy, -15, 139),
            ("Beer", "🍺", Unhealthy, -15, 154),
            ("Popcorn", "🍿", Unhealthy, -15, 375),
            ("Chips", "🥨", Unhealthy, -15, 536),
        ];

        Self {
            definitions: table
                .iter()
                .map(|&(name, glyph, category, points, calories)| {
                    FoodDefinition::new(name, glyph, category, points, calories)
                })
                .collect(),
        }
    }

    /// All entries, in catalog order
    pub fn definitions(&self) -> &[FoodDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Uniform draw over every entry
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &FoodDefinition {
        let index = rng.random_range(0..self.definitions.len());
        &self.definitions[index]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
