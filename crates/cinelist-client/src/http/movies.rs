/*
[INPUT]:  Movie ids and movie attributes
[OUTPUT]: Backend movie responses as raw JSON
[POS]:    HTTP layer - movie CRUD endpoints (require session cookie)
[UPDATE]: When adding movie endpoints or changing their paths
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::{CineListClient, Operation, Result};

const MOVIES_ENDPOINT: &str = "api/filmes";

impl CineListClient {
    /// List every movie
    ///
    /// GET /api/filmes
    pub async fn list_movies(&self) -> Result<Value> {
        self.send_json(Operation::ListMovies, MOVIES_ENDPOINT, None)
            .await
    }

    /// Create a movie from any serializable set of attributes
    ///
    /// POST /api/filmes
    pub async fn create_movie<M>(&self, movie: &M) -> Result<Value>
    where
        M: Serialize + ?Sized,
    {
        let body = self.encode(Operation::CreateMovie, movie)?;
        let created: Value = self
            .send_json(Operation::CreateMovie, MOVIES_ENDPOINT, Some(body))
            .await?;
        tracing::debug!(response = %created, "movie created");
        Ok(created)
    }

    /// Fetch one movie
    ///
    /// GET /api/filmes/{id}
    pub async fn get_movie(&self, id: &str) -> Result<Value> {
        self.send_json(Operation::GetMovie, &movie_endpoint(id), None)
            .await
    }

    /// Replace a movie's attributes
    ///
    /// PUT /api/filmes/{id}
    pub async fn update_movie<M>(&self, id: &str, movie: &M) -> Result<Value>
    where
        M: Serialize + ?Sized,
    {
        let body = self.encode(Operation::UpdateMovie, movie)?;
        self.send_json(Operation::UpdateMovie, &movie_endpoint(id), Some(body))
            .await
    }

    /// Delete a movie. The response body is not read.
    ///
    /// DELETE /api/filmes/{id}
    pub async fn delete_movie(&self, id: &str) -> Result<()> {
        self.send_empty(Operation::DeleteMovie, &movie_endpoint(id), None)
            .await
    }
}

// Ids are embedded verbatim; callers must pass a well-formed path segment.
fn movie_endpoint(id: &str) -> String {
    format!("{}/{}", MOVIES_ENDPOINT, id)
}
