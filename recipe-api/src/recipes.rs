use tracing::instrument;

use crate::{CreatedRecipe, NewRecipe, Recipe, RecipeApi, RecipeSummary};

impl RecipeApi {
    #[instrument(skip(self))]
    pub async fn get_recipes(&self) -> reqwest::Result<Vec<RecipeSummary>> {
        self.get("/recipes/").await
    }

    /// `id` goes into the path as-is; the backend decides what a valid id is.
    #[instrument(skip(self))]
    pub async fn get_recipe_by_id(&self, id: &str) -> reqwest::Result<Recipe> {
        self.get(&format!("/recipes/{id}/")).await
    }

    #[instrument(skip(self, recipe), fields(recipe.name = %recipe.name))]
    pub async fn create_recipe(&self, recipe: &NewRecipe) -> reqwest::Result<CreatedRecipe> {
        self.post("/recipes/", recipe).await
    }
}
