pub mod executor;
pub mod queries;

pub use executor::{FetchError, GraphqlExecutor, QueryExecutor};
pub use queries::QueryRequest;
