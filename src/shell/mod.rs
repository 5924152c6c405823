// Composition root.
//
// Responsibilities
// - Wire the store and the catalog into use case handlers (`state`).
// - Mount REST routes and the GraphQL endpoint (`http`, `graphql`).

pub mod graphql;
pub mod http;
pub mod state;
