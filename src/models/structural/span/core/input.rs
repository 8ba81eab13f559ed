mod stress_strain;
mod weather;
mod wire;

pub use stress_strain::{StressStrain, StressStrainError};
pub use weather::Weather;
pub use wire::Wire;
