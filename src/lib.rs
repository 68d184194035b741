// Module layout
// - bootstrap: configuration, one-shot setup and the server loop
// - infrastructure: sqlite, token signing, session cookies, paste broadcast
// - presentation: GraphQL schema, HTTP and WebSocket handlers, routing
// - application: ports, use cases and difficulty resolution
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
