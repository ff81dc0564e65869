mod provider;
mod registry;

pub use provider::{split_model, Provider};
pub use registry::RoutingTable;
