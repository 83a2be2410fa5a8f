pub mod inspect;
pub mod save;
pub mod util;

pub use inspect::*;
pub use save::*;
pub use util::*;
