mod equilibrium;
mod hover;
mod max_throttle;
mod optimum;

pub use equilibrium::*;
pub use hover::*;
pub use max_throttle::*;
pub use optimum::*;
