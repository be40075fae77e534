/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only drives infrastructure, so every port here is
/// outbound (driven): file access, formatting, output, and progress.
pub mod outbound;
