pub mod emit;
pub mod passes;
pub mod types;

#[cfg(test)]
mod tests;

pub use emit::{Manifest, ManifestEmitter};
pub use types::{Container, Ir, PullPolicy, Service};
