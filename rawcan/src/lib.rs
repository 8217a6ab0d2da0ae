//! **`rawcan`**, the frame-level building blocks shared by the raw CAN
//! diagnostic tools: identifier parsing and classification, receive
//! filters, payload chunking, transmit pacing and the counter stream.

mod constants;
pub use constants::*;
mod frame;
pub use frame::*;
mod filter;
pub use filter::*;
mod chunk;
pub use chunk::*;
mod counter;
pub use counter::*;
mod pacer;
pub use pacer::*;
mod device;
pub use device::*;

pub mod error;
pub use error::CanError;
