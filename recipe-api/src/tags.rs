use tracing::instrument;

use crate::{NewTag, RecipeApi, Tag};

impl RecipeApi {
    #[instrument(skip(self))]
    pub async fn get_tags(&self) -> reqwest::Result<Vec<Tag>> {
        self.get("/tags/").await
    }

    #[instrument(skip(self))]
    pub async fn create_tag(&self, name: &str) -> reqwest::Result<Tag> {
        let body = NewTag {
            name: name.to_string(),
        };

        self.post("/tags/", &body).await
    }
}
