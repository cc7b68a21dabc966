use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

pub const FALLBACK_EMOJI: &str = "🍽️";
pub const FALLBACK_TIME: &str = "⏱️ 15 minutes";
pub const FALLBACK_INGREDIENT: &str = "Recipe details coming soon!";
pub const FALLBACK_INSTRUCTION: &str = "Check back later for full instructions!";

/// A recipe as shown in the detail modal
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecipeRecord {
    pub title: String,
    pub emoji: String,
    pub time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeRecord {
    /// Placeholder shown for cards that have no entry in the catalog
    pub fn fallback(title: &str) -> Self {
        Self {
            title: title.to_string(),
            emoji: FALLBACK_EMOJI.to_string(),
            time: FALLBACK_TIME.to_string(),
            ingredients: vec![FALLBACK_INGREDIENT.to_string()],
            instructions: vec![FALLBACK_INSTRUCTION.to_string()],
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

struct BuiltinRecipe {
    title: &'static str,
    emoji: &'static str,
    time: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
}

impl BuiltinRecipe {
    fn to_record(&self) -> RecipeRecord {
        RecipeRecord {
            title: self.title.to_string(),
            emoji: self.emoji.to_string(),
            time: self.time.to_string(),
            ingredients: self.ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

static BUILTIN_RECIPES: [BuiltinRecipe; 6] = [
    BuiltinRecipe {
        title: "Rainbow Quinoa Bowl",
        emoji: "🥗",
        time: "⏱️ 15 minutes",
        ingredients: &[
            "1 cup quinoa",
            "2 cups water",
            "1 bell pepper (diced)",
            "1 cucumber (diced)",
            "1 avocado (sliced)",
            "2 tbsp tahini",
            "1 tbsp lemon juice",
            "Salt and pepper to taste",
        ],
        instructions: &[
            "Cook quinoa according to package instructions",
            "While quinoa cooks, dice the bell pepper and cucumber",
            "Mix tahini with lemon juice and a pinch of salt",
            "Combine cooked quinoa with vegetables",
            "Top with avocado slices and drizzle with tahini dressing",
            "Season with salt and pepper",
        ],
    },
    BuiltinRecipe {
        title: "Veggie Scramble",
        emoji: "🍳",
        time: "⏱️ 10 minutes",
        ingredients: &[
            "3 eggs",
            "1 cup fresh spinach",
            "1 tomato (diced)",
            "1/4 cup shredded cheese",
            "1 tbsp olive oil",
            "Salt and pepper to taste",
        ],
        instructions: &[
            "Heat olive oil in a non-stick pan over medium heat",
            "Add spinach and cook until wilted",
            "Beat eggs in a bowl with salt and pepper",
            "Pour eggs into the pan with spinach",
            "Add diced tomatoes and scramble gently",
            "Top with cheese and serve immediately",
        ],
    },
    BuiltinRecipe {
        title: "Green Smoothie",
        emoji: "🥤",
        time: "⏱️ 5 minutes",
        ingredients: &[
            "2 cups fresh spinach",
            "1 banana",
            "1/2 cup mixed berries",
            "1 cup almond milk",
            "1 tbsp honey (optional)",
            "1/2 cup ice",
        ],
        instructions: &[
            "Add spinach to blender first",
            "Add banana, berries, and almond milk",
            "Blend on high for 30 seconds",
            "Add ice and blend until smooth",
            "Taste and add honey if desired",
            "Pour into glass and enjoy immediately",
        ],
    },
    BuiltinRecipe {
        title: "Black Bean Tacos",
        emoji: "🌮",
        time: "⏱️ 20 minutes",
        ingredients: &[
            "1 can black beans (drained)",
            "6 corn tortillas",
            "1 avocado (sliced)",
            "1 lime (juiced)",
            "1/2 red onion (diced)",
            "1/4 cup cilantro",
            "1 tsp cumin",
            "Salt to taste",
        ],
        instructions: &[
            "Heat black beans in a pan with cumin and salt",
            "Warm tortillas in a dry pan or microwave",
            "Mash half the beans slightly for texture",
            "Fill tortillas with beans",
            "Top with avocado, onion, and cilantro",
            "Drizzle with lime juice and serve",
        ],
    },
    BuiltinRecipe {
        title: "Zucchini Pasta",
        emoji: "🍝",
        time: "⏱️ 25 minutes",
        ingredients: &[
            "3 medium zucchinis",
            "2 cups marinara sauce",
            "2 cloves garlic (minced)",
            "2 tbsp olive oil",
            "1/4 cup fresh basil",
            "1/4 cup parmesan cheese",
            "Salt and pepper to taste",
        ],
        instructions: &[
            "Spiralize zucchinis into noodle shapes",
            "Heat olive oil in a large pan",
            "Add garlic and cook for 1 minute",
            "Add zucchini noodles and cook for 3-4 minutes",
            "Add marinara sauce and heat through",
            "Top with basil and parmesan cheese",
        ],
    },
    BuiltinRecipe {
        title: "Mediterranean Wrap",
        emoji: "🥙",
        time: "⏱️ 12 minutes",
        ingredients: &[
            "2 whole wheat tortillas",
            "1/2 cup hummus",
            "1 cucumber (sliced)",
            "1/4 cup feta cheese",
            "1/4 cup kalamata olives",
            "1/4 cup red onion (sliced)",
            "2 tbsp olive oil",
            "Salt and pepper to taste",
        ],
        instructions: &[
            "Warm tortillas slightly",
            "Spread hummus evenly on tortillas",
            "Layer cucumber, feta, olives, and onion",
            "Drizzle with olive oil",
            "Season with salt and pepper",
            "Roll tightly and slice in half",
        ],
    },
];

/// Title -> recipe lookup table. Built once, read-only afterwards.
#[derive(Clone, Debug)]
pub struct RecipeCatalog {
    by_title: HashMap<String, RecipeRecord>,
}

#[derive(Serialize)]
struct CatalogManifest<'a> {
    format_version: u32,
    titles: Vec<&'a str>,
}

impl RecipeCatalog {
    pub fn builtin() -> Self {
        let by_title = BUILTIN_RECIPES
            .iter()
            .map(|r| (r.title.to_string(), r.to_record()))
            .collect();
        Self { by_title }
    }

    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }

    /// Exact-title match only
    pub fn get(&self, title: &str) -> Option<&RecipeRecord> {
        self.by_title.get(title)
    }

    /// Total lookup: unknown titles get the placeholder record
    pub fn lookup(&self, title: &str) -> RecipeRecord {
        self.get(title)
            .cloned()
            .unwrap_or_else(|| RecipeRecord::fallback(title))
    }

    /// Sorted titles (the map itself has no order)
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.by_title.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    pub fn manifest_json(&self) -> String {
        let out = CatalogManifest {
            format_version: 1,
            titles: self.titles(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Process-wide built-in catalog
pub fn catalog() -> &'static RecipeCatalog {
    static CATALOG: OnceLock<RecipeCatalog> = OnceLock::new();
    CATALOG.get_or_init(RecipeCatalog::builtin)
}

pub fn lookup_recipe(title: &str) -> RecipeRecord {
    catalog().lookup(title)
}
