mod recording;
mod session;
pub use recording::*;
pub use session::*;
