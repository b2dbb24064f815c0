/// Download statistics domain layer
///
/// Pure business logic with no I/O: value objects, services that reshape
/// registry and download data, and the request validation policy.
pub mod domain;
pub mod policies;
pub mod services;
