#![no_std]

pub mod proxy_aave_pool;
pub mod proxy_comptroller;
pub mod proxy_swap_pool;
