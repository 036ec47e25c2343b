//! Command handlers, one module per subcommand.
//!
//! Each handler has the shape `handle_X_command(..., out, err) -> Result<(), CliError>`
//! and writes only to the streams it is given, so tests can run them against
//! in-memory buffers.

mod cfg;
mod deal;
mod play;
mod rank;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rank::handle_rank_command;
pub use sim::handle_sim_command;
