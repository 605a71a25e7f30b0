use crate::models::{Person, PersonCredits};
use crate::TmdbClient;

impl TmdbClient {
    /// Get the record for one person.
    /// GET /person/{id}
    pub async fn person_detail(&self, id: i64) -> crate::Result<Person> {
        let url = self.url(&format!("/person/{}", id));
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key()), ("language", self.lang.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get the movies a person is credited in.
    /// GET /person/{id}/movie_credits
    pub async fn person_movie_credits(&self, id: i64) -> crate::Result<PersonCredits> {
        let url = self.url(&format!("/person/{}/movie_credits", id));
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key()), ("language", self.lang.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
