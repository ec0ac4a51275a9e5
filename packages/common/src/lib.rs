pub mod error;
pub mod path;
pub mod result;
pub mod value;

pub use error::*;
pub use path::*;
pub use result::*;
pub use value::*;
