//! Command implementations for the huffpack CLI.

pub mod pack;
pub mod roundtrip;
pub mod table;

pub use pack::cmd_pack;
pub use roundtrip::cmd_roundtrip;
pub use table::cmd_table;
