/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the view
/// models and use cases depend on.
pub mod outbound;
