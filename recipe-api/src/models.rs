use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type IngredientId = i64;
pub type TagId = i64;
pub type RecipeId = i64;

pub const DEFAULT_SERVINGS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

/// An ingredient as used by one recipe.
///
/// The backend sends these flattened, `{ "id", "name", "quantity" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub quantity: String,
}

/// A row of the recipe listing. Tags are referenced by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<TagId>,
}

impl RecipeSummary {
    pub fn has_tag(&self, tag: TagId) -> bool {
        self.tags.contains(&tag)
    }
}

/// A full recipe as returned by `GET /recipes/{id}/`.
///
/// Fields the client doesn't know about yet are kept in `extra` so nothing
/// the backend sends is dropped on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIngredient {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTag {
    pub name: String,
}

/// Reference to an existing ingredient inside a [`NewRecipe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecipeIngredient {
    pub id: IngredientId,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub servings: u32,
    pub instructions: Vec<String>,
    pub ingredients: Vec<NewRecipeIngredient>,
    pub tags: Vec<TagId>,
}

/// What the backend echoes back after a create. It has no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedRecipe {
    pub name: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<TagId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
