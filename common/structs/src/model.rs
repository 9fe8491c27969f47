#![no_std]

use common_constants::{RAY, RAY_PRECISION, WAD_PRECISION};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Lending platform families the folding account knows how to talk to.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    CompoundFork,
    Aave,
    Venus,
}

/// Platform and assets of a position, recorded on open and immutable afterwards.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq)]
pub struct PositionConfig<M: ManagedTypeApi> {
    pub platform: ManagedAddress<M>,
    pub supply_token: EgldOrEsdtTokenIdentifier<M>,
    pub borrow_token: EgldOrEsdtTokenIdentifier<M>,
}

impl<M: ManagedTypeApi> PositionConfig<M> {
    pub fn is_same_token(&self) -> bool {
        self.supply_token == self.borrow_token
    }
}

/// One hop of an exact-output route. `fee` is the tier of the pool between this
/// token and the next one; it is ignored on the last step.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Eq,
)]
pub struct PathStep<M: ManagedTypeApi> {
    pub token: EgldOrEsdtTokenIdentifier<M>,
    pub fee: u32,
}

impl<M: ManagedTypeApi> PathStep<M> {
    pub fn new(token: EgldOrEsdtTokenIdentifier<M>, fee: u32) -> Self {
        PathStep { token, fee }
    }
}

pub fn has_repeated_tokens<M: ManagedTypeApi>(path: &ManagedVec<M, PathStep<M>>) -> bool {
    let len = path.len();
    for i in 0..len {
        let token = path.get(i).token.clone();
        for j in (i + 1)..len {
            if path.get(j).token == token {
                return true;
            }
        }
    }
    false
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PnlSetting<M: ManagedTypeApi> {
    pub price_target: ManagedDecimal<M, NumDecimals>,
    pub is_take_profit: bool,
    pub fixed_reward: BigUint<M>,
    pub percentage_reward: ManagedDecimal<M, NumDecimals>,
    pub unwind_factor: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> PnlSetting<M> {
    /// Take profit fires at or above the target, stop loss at or below it.
    pub fn is_reached(&self, current_ratio: &ManagedDecimal<M, NumDecimals>) -> bool {
        if self.is_take_profit {
            current_ratio >= &self.price_target
        } else {
            current_ratio <= &self.price_target
        }
    }

    /// A new setting must describe a condition that does not hold yet.
    pub fn is_ahead_of(&self, current_ratio: &ManagedDecimal<M, NumDecimals>) -> bool {
        if self.is_take_profit {
            &self.price_target > current_ratio
        } else {
            &self.price_target < current_ratio
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorPolicy {
    Whitelist,
    Anyone,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct StopLossConfig<M: ManagedTypeApi> {
    pub unwind_factor: ManagedDecimal<M, NumDecimals>,
    pub slippage_incentive: ManagedDecimal<M, NumDecimals>,
    pub collateral_usage_limit: ManagedDecimal<M, NumDecimals>,
    pub executor_policy: ExecutorPolicy,
}

impl<M: ManagedTypeApi> StopLossConfig<M> {
    /// The value reported when nothing is configured.
    pub fn zero() -> Self {
        let zero = ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION);
        StopLossConfig {
            unwind_factor: zero.clone(),
            slippage_incentive: zero.clone(),
            collateral_usage_limit: zero,
            executor_policy: ExecutorPolicy::Whitelist,
        }
    }

    pub fn is_breached(&self, collateral_usage: &ManagedDecimal<M, NumDecimals>) -> bool {
        collateral_usage > &self.collateral_usage_limit
    }

    pub fn is_open_to_anyone(&self) -> bool {
        self.executor_policy == ExecutorPolicy::Anyone
    }
}

/// Risk, market and reward figures of one asset, normalized to WAD.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AssetMetadata<M: ManagedTypeApi> {
    pub token: EgldOrEsdtTokenIdentifier<M>,
    pub decimals: usize,
    pub price: ManagedDecimal<M, NumDecimals>,
    pub collateral_factor: ManagedDecimal<M, NumDecimals>,
    pub liquidation_factor: ManagedDecimal<M, NumDecimals>,
    pub total_supply: BigUint<M>,
    pub total_borrow: BigUint<M>,
    pub supply_apr: ManagedDecimal<M, NumDecimals>,
    pub borrow_apr: ManagedDecimal<M, NumDecimals>,
    pub reward_token: EgldOrEsdtTokenIdentifier<M>,
    pub supply_rewards_per_year: BigUint<M>,
    pub borrow_rewards_per_year: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PositionSnapshot<M: ManagedTypeApi> {
    pub platform: ManagedAddress<M>,
    pub supply_token: EgldOrEsdtTokenIdentifier<M>,
    pub borrow_token: EgldOrEsdtTokenIdentifier<M>,
    pub supply_balance: BigUint<M>,
    pub borrow_balance: BigUint<M>,
    pub principal_value: BigUint<M>,
    pub position_value: BigUint<M>,
    pub collateral_usage_factor: ManagedDecimal<M, NumDecimals>,
    pub supply_price: ManagedDecimal<M, NumDecimals>,
    pub borrow_price: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PnlSimulation<M: ManagedTypeApi> {
    pub can_be_triggered: bool,
    pub reason: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> PnlSimulation<M> {
    pub fn triggerable() -> Self {
        PnlSimulation {
            can_be_triggered: true,
            reason: ManagedBuffer::new(),
        }
    }

    pub fn blocked(reason: &[u8]) -> Self {
        PnlSimulation {
            can_be_triggered: false,
            reason: ManagedBuffer::from(reason),
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct IncreaseResult<M: ManagedTypeApi> {
    pub supplied: BigUint<M>,
    pub borrowed: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct DecreaseResult<M: ManagedTypeApi> {
    pub repaid: BigUint<M>,
    pub redeemed_for_repayment: BigUint<M>,
    pub withdrawn: BigUint<M>,
    pub user_amount: BigUint<M>,
    pub principal_tax: BigUint<M>,
    pub profit_tax: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
/// `redeemed` is the supply spent on settling the repaid debt plus the executor reward.
pub struct UnwindResult<M: ManagedTypeApi> {
    pub repaid: BigUint<M>,
    pub redeemed: BigUint<M>,
    pub executor_reward: BigUint<M>,
}

/// Outcome of splitting a withdrawal between the owner and the subsidy holder.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct SubsidySplit<M: ManagedTypeApi> {
    pub principal_reduced: BigUint<M>,
    pub principal_tax: BigUint<M>,
    pub profit_tax: BigUint<M>,
    pub user_amount: BigUint<M>,
}

impl<M: ManagedTypeApi> SubsidySplit<M> {
    pub fn total_tax(&self) -> BigUint<M> {
        &self.principal_tax + &self.profit_tax
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq)]
pub enum FlashOperation {
    Increase,
    Decrease,
}

/// State of an in-flight flash swap, written before the first pool is called and
/// cleared once the outermost call returns.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct FlashContext<M: ManagedTypeApi> {
    pub operation: FlashOperation,
    pub expected_pool: ManagedAddress<M>,
    pub path: ManagedVec<M, PathStep<M>>,
    pub hop: usize,
    pub same_token: bool,
    pub principal_amount: BigUint<M>,
    pub flash_amount: BigUint<M>,
    pub max_payment: BigUint<M>,
    pub settled_amount: BigUint<M>,
    pub settled: bool,
}

impl<M: ManagedTypeApi> FlashContext<M> {
    pub fn hop_count(&self) -> usize {
        if self.same_token {
            1
        } else {
            self.path.len() - 1
        }
    }

    pub fn is_last_hop(&self) -> bool {
        self.hop + 1 >= self.hop_count()
    }

    /// Token the current pool expects back.
    pub fn owed_token(&self) -> EgldOrEsdtTokenIdentifier<M> {
        if self.same_token {
            self.path.get(0).token.clone()
        } else {
            self.path.get(self.hop + 1).token.clone()
        }
    }
}

/// Per second rates of a mock lending market. Rates are RAY scaled.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketRates<M: ManagedTypeApi> {
    pub supply_rate: ManagedDecimal<M, NumDecimals>,
    pub borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub reward_speed: BigUint<M>,
}

impl<M: ManagedTypeApi> MarketRates<M> {
    pub fn zero() -> Self {
        let zero = ManagedDecimal::from_raw_units(BigUint::zero(), RAY_PRECISION);
        MarketRates {
            supply_rate: zero.clone(),
            borrow_rate: zero,
            reward_speed: BigUint::zero(),
        }
    }
}

/// Indexes and scaled totals of a mock lending market.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketState<M: ManagedTypeApi> {
    pub supply_index: ManagedDecimal<M, NumDecimals>,
    pub borrow_index: ManagedDecimal<M, NumDecimals>,
    pub reward_index: ManagedDecimal<M, NumDecimals>,
    pub total_scaled_supply: BigUint<M>,
    pub total_scaled_borrow: BigUint<M>,
    pub last_timestamp: u64,
}

impl<M: ManagedTypeApi> MarketState<M> {
    pub fn new(timestamp: u64) -> Self {
        let one = ManagedDecimal::from_raw_units(BigUint::from(RAY), RAY_PRECISION);
        MarketState {
            supply_index: one.clone(),
            borrow_index: one,
            reward_index: ManagedDecimal::from_raw_units(BigUint::zero(), RAY_PRECISION),
            total_scaled_supply: BigUint::zero(),
            total_scaled_borrow: BigUint::zero(),
            last_timestamp: timestamp,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct CompoundMarket<M: ManagedTypeApi> {
    pub decimals: usize,
    pub collateral_factor: BigUint<M>,
    pub borrow_cap: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct CompoundMarketSnapshot<M: ManagedTypeApi> {
    pub decimals: usize,
    pub collateral_factor: BigUint<M>,
    pub price: BigUint<M>,
    pub total_supply: BigUint<M>,
    pub total_borrow: BigUint<M>,
    pub supply_rate: BigUint<M>,
    pub borrow_rate: BigUint<M>,
    pub reward_speed: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AaveReserve<M: ManagedTypeApi> {
    pub decimals: usize,
    pub ltv_bps: u64,
    pub liquidation_threshold_bps: u64,
    pub borrow_cap: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AaveReserveSnapshot<M: ManagedTypeApi> {
    pub decimals: usize,
    pub ltv_bps: u64,
    pub liquidation_threshold_bps: u64,
    pub price: BigUint<M>,
    pub total_supply: BigUint<M>,
    pub total_borrow: BigUint<M>,
    pub supply_rate: BigUint<M>,
    pub borrow_rate: BigUint<M>,
    pub emission_per_second: BigUint<M>,
}

/// Account wide values in the platform's base currency. `collateral_value` is
/// already weighted by the collateral factors.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountLiquidity<M: ManagedTypeApi> {
    pub collateral_value: BigUint<M>,
    pub borrow_value: BigUint<M>,
}
