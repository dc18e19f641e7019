/// Daily content service interface
pub mod content;
/// Place service interface
pub mod place;
/// Prayer time service interface
pub mod prayer_time;

pub use content::*;
pub use place::*;
pub use prayer_time::*;
