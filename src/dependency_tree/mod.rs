/// Domain layer - dependency trees, graphs, and the transformations between them
///
/// Everything here is pure and synchronous; reading and writing documents
/// happens in the adapters.
pub mod domain;
pub mod services;
