pub mod candidates;
pub mod error;
pub mod keymap;
pub mod normalize;

pub use candidates::generate_candidates;
pub use error::CoreError;
pub use keymap::Keymap;
pub use normalize::{is_valid, normalize, validate};
