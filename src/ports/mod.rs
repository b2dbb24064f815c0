/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives every external system through the
/// outbound ports defined here.
pub mod outbound;
