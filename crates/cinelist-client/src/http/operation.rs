/*
[INPUT]:  Backend capability being invoked
[OUTPUT]: Verb, credential mode and failure description per operation
[POS]:    HTTP layer - operation table shared by every endpoint
[UPDATE]: When adding an endpoint or changing its verb or credential mode
*/

use std::fmt;

use reqwest::Method;

/// Whether the session cookie travels with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    /// Attach the session cookie and store cookies the response sets.
    Include,
    /// Neither send nor store cookies.
    Omit,
}

/// One backend capability exposed by [`crate::CineListClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Register,
    ResetPassword,
    ListMovies,
    CreateMovie,
    GetMovie,
    UpdateMovie,
    DeleteMovie,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Login,
        Operation::Register,
        Operation::ResetPassword,
        Operation::ListMovies,
        Operation::CreateMovie,
        Operation::GetMovie,
        Operation::UpdateMovie,
        Operation::DeleteMovie,
    ];

    pub fn method(self) -> Method {
        match self {
            Operation::Login
            | Operation::Register
            | Operation::ResetPassword
            | Operation::CreateMovie => Method::POST,
            Operation::ListMovies | Operation::GetMovie => Method::GET,
            Operation::UpdateMovie => Method::PUT,
            Operation::DeleteMovie => Method::DELETE,
        }
    }

    /// Auth endpoints are called anonymously; movie endpoints need the session.
    pub fn credentials(self) -> Credentials {
        match self {
            Operation::Login | Operation::Register | Operation::ResetPassword => Credentials::Omit,
            Operation::ListMovies
            | Operation::CreateMovie
            | Operation::GetMovie
            | Operation::UpdateMovie
            | Operation::DeleteMovie => Credentials::Include,
        }
    }

    /// Prefix of the error message raised when this operation fails.
    pub fn description(self) -> &'static str {
        match self {
            Operation::Login => "Error during login",
            Operation::Register => "Error during register",
            Operation::ResetPassword => "Error resetting password",
            Operation::ListMovies => "Error listing movies",
            Operation::CreateMovie => "Error creating movie",
            Operation::GetMovie => "Error fetching movie",
            Operation::UpdateMovie => "Error updating movie",
            Operation::DeleteMovie => "Error deleting movie",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::Register => "register",
            Operation::ResetPassword => "reset_password",
            Operation::ListMovies => "list_movies",
            Operation::CreateMovie => "create_movie",
            Operation::GetMovie => "get_movie",
            Operation::UpdateMovie => "update_movie",
            Operation::DeleteMovie => "delete_movie",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_operations_omit_credentials() {
        for op in [Operation::Login, Operation::Register, Operation::ResetPassword] {
            assert_eq!(op.credentials(), Credentials::Omit, "{op}");
            assert_eq!(op.method(), Method::POST, "{op}");
        }
    }

    #[test]
    fn test_movie_operations_include_credentials() {
        let movie_ops = Operation::ALL
            .iter()
            .filter(|op| op.as_str().ends_with("movie") || op.as_str().ends_with("movies"));
        assert_eq!(movie_ops.clone().count(), 5);
        for op in movie_ops {
            assert_eq!(op.credentials(), Credentials::Include, "{op}");
        }
    }

    #[test]
    fn test_movie_verbs() {
        assert_eq!(Operation::ListMovies.method(), Method::GET);
        assert_eq!(Operation::CreateMovie.method(), Method::POST);
        assert_eq!(Operation::GetMovie.method(), Method::GET);
        assert_eq!(Operation::UpdateMovie.method(), Method::PUT);
        assert_eq!(Operation::DeleteMovie.method(), Method::DELETE);
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for op in Operation::ALL {
            assert!(seen.insert(op.description()), "duplicate description for {op}");
        }
    }
}
