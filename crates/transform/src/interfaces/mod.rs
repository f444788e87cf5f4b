mod args;

pub use args::{TransformArgs, TransformArgsBuilder};
