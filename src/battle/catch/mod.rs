pub mod calculation;
pub mod throw;
pub mod validation;

pub use calculation::*;
pub use throw::*;
pub use validation::*;
