pub mod account;
pub mod decrease;
pub mod flash;
pub mod increase;
