//! Testing utilities and harness for Sitelift

pub mod recording;
pub mod robot;
pub mod robot_assertions;

#[cfg(test)]
mod tests;

// Re-export testing utilities
pub use recording::*;
pub use robot::*;

pub mod prelude {
    pub use crate::recording::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
