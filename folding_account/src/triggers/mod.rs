pub mod pnl;
pub mod stop_loss;
pub mod unwind;
