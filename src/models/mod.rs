pub mod language;
pub mod location;
pub mod sample;
pub mod score;
pub mod weights;

pub use language::*;
pub use location::*;
pub use sample::*;
pub use score::*;
pub use weights::*;
