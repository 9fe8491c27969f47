#![no_std]

// Authorization

pub static ERROR_NOT_ACCOUNT_OWNER: &[u8] = b"Caller is not the account owner.";

pub static ERROR_NOT_AUTHORIZED_EXECUTOR: &[u8] = b"Caller is not an authorized executor.";

pub static ERROR_INVALID_CALLBACK_CALLER: &[u8] = b"Callback caller is not the expected pool.";

// Invalid input

pub static ERROR_INSUFFICIENT_SUPPLY: &[u8] = b"Supply amount is lower than the principal amount.";

pub static ERROR_INVALID_UNWIND_FACTOR: &[u8] = b"Unwind factor must be between 0 and 1.";

pub static ERROR_INVALID_PERCENTAGE_REWARD: &[u8] = b"Percentage reward must be between 0 and 1.";

pub static ERROR_INVALID_SLIPPAGE_INCENTIVE: &[u8] = b"Slippage incentive must be between 0 and 1.";

pub static ERROR_INVALID_COLLATERAL_USAGE_LIMIT: &[u8] =
    b"Collateral usage limit is already breached or out of range.";

pub static ERROR_INVALID_PATH: &[u8] = b"Invalid multihop path.";

pub static ERROR_PATH_START_MISMATCH: &[u8] = b"Path does not start with the expected token.";

pub static ERROR_PATH_END_MISMATCH: &[u8] = b"Path does not end with the expected token.";

pub static ERROR_INVALID_PRICE_TARGET: &[u8] = b"Price target is on the wrong side of the current price.";

pub static ERROR_INVALID_FEE_TIER: &[u8] = b"Invalid fee tier.";

pub static ERROR_INVALID_SUBSIDY_FACTOR: &[u8] = b"Subsidy factor must be between 0 and 1.";

pub static ERROR_INVALID_PNL_INDEX: &[u8] = b"PNL setting index out of range.";

pub static ERROR_TOO_MANY_PNL_SETTINGS: &[u8] = b"Too many PNL settings.";

pub static ERROR_INVALID_ADDRESS: &[u8] = b"Invalid address.";

pub static ERROR_INVALID_PAYMENT_TOKEN: &[u8] = b"Invalid payment token.";

pub static ERROR_INSUFFICIENT_REPAYMENT: &[u8] = b"Payment does not cover the repay amount.";

// State mismatch

pub static ERROR_PLATFORM_MISMATCH: &[u8] = b"Platform does not match the position.";

pub static ERROR_SUPPLY_TOKEN_MISMATCH: &[u8] = b"Supply token does not match the position.";

pub static ERROR_BORROW_TOKEN_MISMATCH: &[u8] = b"Borrow token does not match the position.";

pub static ERROR_POSITION_NOT_INITIALIZED: &[u8] = b"Position is not initialized.";

pub static ERROR_FLASH_IN_PROGRESS: &[u8] = b"A flash swap is already in progress.";

pub static ERROR_FLASH_NOT_SETTLED: &[u8] = b"Flash swap was not settled by the pool.";

pub static ERROR_PLATFORM_NOT_REGISTERED: &[u8] = b"Lending platform is not registered.";

pub static ERROR_POOL_NOT_REGISTERED: &[u8] = b"No pool registered for this pair and fee.";

pub static ERROR_COLLATERAL_USAGE_DECREASED: &[u8] =
    b"Collateral usage decreased while adding leverage.";

pub static ERROR_COLLATERAL_USAGE_TOO_HIGH: &[u8] = b"Collateral usage factor above 1.";

pub static ERROR_NO_DEBT: &[u8] = b"Position has no debt.";

pub static ERROR_NOTHING_TO_UNWIND: &[u8] = b"Nothing to unwind.";

pub static ERROR_INCENTIVE_EXCEEDS_SUPPLY: &[u8] = b"Incentive exceeds supply balance.";

// Slippage

pub static ERROR_SLIPPAGE_EXCEEDED: &[u8] = b"Swap cost exceeds the allowed maximum.";

// Condition not met

pub static ERROR_PRICE_TARGET_NOT_REACHED: &[u8] = b"Price target not reached.";

pub static ERROR_COLLATERAL_USAGE_BELOW_LIMIT: &[u8] = b"Collateral usage is below the limit.";

pub static ERROR_STOP_LOSS_NOT_CONFIGURED: &[u8] = b"Stop loss is not configured.";

// Arithmetic

pub static ERROR_DIVISION_BY_ZERO: &[u8] = b"Division by zero.";

pub static ERROR_UNDERFLOW: &[u8] = b"Arithmetic underflow.";

// Lending platform mocks

pub static ERROR_MARKET_NOT_LISTED: &[u8] = b"Market is not listed.";

pub static ERROR_MARKET_ALREADY_LISTED: &[u8] = b"Market is already listed.";

pub static ERROR_MARKET_NOT_ENTERED: &[u8] = b"Market not entered.";

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Insufficient supply balance.";

pub static ERROR_INSUFFICIENT_CASH: &[u8] = b"Insufficient cash.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Insufficient collateral.";

pub static ERROR_BORROW_CAP_REACHED: &[u8] = b"Borrow cap reached.";

pub static ERROR_INVALID_FACTOR: &[u8] = b"Factor out of range.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

// Swap pool mock

pub static ERROR_INVALID_POOL_TOKEN: &[u8] = b"Token is not part of this pool.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient pool liquidity.";

pub static ERROR_INSUFFICIENT_INPUT_AMOUNT: &[u8] = b"Pool was not repaid the owed amount.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Price must be greater than zero.";

pub static ERROR_TOO_LITTLE_RECEIVED: &[u8] = b"Too little received.";

pub static ERROR_TOO_MUCH_REQUESTED: &[u8] = b"Too much requested.";
