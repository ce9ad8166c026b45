mod token;
pub use token::*;

mod assets;
pub use assets::*;

mod jobs;
pub use jobs::*;

mod errors;
pub use errors::*;
