use tracing::instrument;

use crate::{Ingredient, NewIngredient, RecipeApi};

impl RecipeApi {
    #[instrument(skip(self))]
    pub async fn get_ingredients(&self) -> reqwest::Result<Vec<Ingredient>> {
        self.get("/ingredients/").await
    }

    #[instrument(skip(self))]
    pub async fn create_ingredient(&self, name: &str) -> reqwest::Result<Ingredient> {
        let body = NewIngredient {
            name: name.to_string(),
        };

        self.post("/ingredients/", &body).await
    }
}
