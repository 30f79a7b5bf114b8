// Composition root.
//
// - Read config from the environment.
// - Instantiate the in-memory adapters and wire them into use case handlers.
// - Serve the HTTP router and GraphQL schema.
// - Spawn the session binding worker.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
