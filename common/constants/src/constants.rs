#![no_std]

/// Fixed-point mantissa used for prices, factors and rewards
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

/// Index precision used by the lending platform mocks
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

pub const BPS: u64 = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Sentinel amount meaning "the whole balance" for repay and withdraw
pub const MAX_AMOUNT: u128 = u128::MAX;

/// Pool fees are expressed in hundredths of a basis point
pub const FEE_PRECISION: u32 = 1_000_000;

pub const MAX_PNL_SETTINGS: usize = 16;

/// Most a flash funded unwind may pay the pools above the oracle value of the repaid debt
pub const UNWIND_SLIPPAGE_TOLERANCE_BPS: u64 = 300;

pub const SECONDS_PER_YEAR: u64 = 31_556_926;

/// Compound style oracles report `price * 10^(36 - decimals)`
pub const COMPOUND_PRICE_PRECISION: usize = 36;

/// Aave oracles report prices in an 8 decimals base currency
pub const AAVE_PRICE_PRECISION: usize = 8;

pub const FLASH_SWAP_CALLBACK_ENDPOINT: &[u8] = b"flashSwapCallback";

pub const REASON_PRICE_TARGET_NOT_REACHED: &[u8] = b"Price target not reached";
pub const REASON_NO_DEBT: &[u8] = b"Position has no debt";
pub const REASON_NOTHING_TO_UNWIND: &[u8] = b"Nothing to unwind";
pub const REASON_INCENTIVE_EXCEEDS_SUPPLY: &[u8] = b"Incentive exceeds supply balance";
pub const REASON_STOP_LOSS_NOT_CONFIGURED: &[u8] = b"Stop loss not configured";
pub const REASON_COLLATERAL_USAGE_BELOW_LIMIT: &[u8] = b"Collateral usage below limit";
