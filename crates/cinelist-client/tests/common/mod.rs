/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and operation dispatch
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new operations or fixtures
*/

//! Common test utilities for cinelist-client tests

#![allow(dead_code)]

use cinelist_client::{CineListClient, ClientConfig, Movie, Operation, RegisterRequest, Result};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const MOVIE_ID: &str = "42";
pub const SESSION_COOKIE: &str = "JSESSIONID=session-abc";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client with both the backend and the app origin pointed at `server`
pub fn client_for(server: &MockServer) -> CineListClient {
    CineListClient::with_config_and_base_urls(ClientConfig::default(), &server.uri(), &server.uri())
        .expect("client init")
}

/// URL of a local port nothing listens on
pub fn closed_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn sample_register() -> RegisterRequest {
    RegisterRequest {
        name: "Ana".to_string(),
        email: "ana@b.com".to_string(),
        tax_id: "12345678900".to_string(),
        password: "s3cret".to_string(),
    }
}

pub fn sample_movie() -> Value {
    json!({"titulo": "O Auto da Compadecida", "nota": 9.5})
}

pub fn typed_movie() -> Movie {
    Movie::new("O Auto da Compadecida", 9.5)
}

/// Path each operation is expected to hit on the mock server
pub fn expected_path(op: Operation) -> String {
    match op {
        Operation::Login => "/auth/login".to_string(),
        Operation::Register => "/auth/register".to_string(),
        Operation::ResetPassword => "/auth/reset-password".to_string(),
        Operation::ListMovies | Operation::CreateMovie => "/api/filmes".to_string(),
        Operation::GetMovie | Operation::UpdateMovie | Operation::DeleteMovie => {
            format!("/api/filmes/{MOVIE_ID}")
        }
    }
}

/// Invoke `op` with fixture arguments. Delete yields `Value::Null`.
pub async fn invoke(client: &CineListClient, op: Operation) -> Result<Value> {
    match op {
        Operation::Login => client.login("a@b.com", "x").await,
        Operation::Register => client.register(&sample_register()).await,
        Operation::ResetPassword => client.reset_password("tok-123", "n3w").await,
        Operation::ListMovies => client.list_movies().await,
        Operation::CreateMovie => client.create_movie(&sample_movie()).await,
        Operation::GetMovie => client.get_movie(MOVIE_ID).await,
        Operation::UpdateMovie => client.update_movie(MOVIE_ID, &sample_movie()).await,
        Operation::DeleteMovie => client.delete_movie(MOVIE_ID).await.map(|()| Value::Null),
    }
}
