// Adapters layer: concrete implementations for the external collaborators
// (health-data service over HTTP, console notifier and screen).

pub mod console;
pub mod http_provider;
