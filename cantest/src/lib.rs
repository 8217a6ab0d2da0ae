//! Linux glue for the raw CAN diagnostic tools: the bound raw socket and
//! the blocking send/receive loops driving it.

mod socket;
pub use socket::*;
mod tx;
pub use tx::*;
mod rx;
pub use rx::*;
