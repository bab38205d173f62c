//! Command implementations.

mod scaffold;

pub use scaffold::ScaffoldCommand;
