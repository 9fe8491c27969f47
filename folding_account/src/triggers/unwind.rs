multiversx_sc::imports!();

use common_constants::{REASON_INCENTIVE_EXCEEDS_SUPPLY, REASON_NOTHING_TO_UNWIND, REASON_NO_DEBT};
use common_errors::*;
use common_structs::{FlashOperation, PathStep, UnwindResult};

use crate::{cache::Cache, helpers, positions, storage, validation};

/// Amounts of a prospective unwind, computed before anything moves.
pub struct UnwindPlan<M: ManagedTypeApi> {
    pub repay_amount: BigUint<M>,
    /// Repaid debt valued in supply token at the reference prices.
    pub repay_value: BigUint<M>,
}

/// Why an unwind cannot run in the current state.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum UnwindBlocker {
    NoDebt,
    NothingToUnwind,
    IncentiveExceedsSupply,
}

impl UnwindBlocker {
    pub fn error(self) -> &'static [u8] {
        match self {
            UnwindBlocker::NoDebt => ERROR_NO_DEBT,
            UnwindBlocker::NothingToUnwind => ERROR_NOTHING_TO_UNWIND,
            UnwindBlocker::IncentiveExceedsSupply => ERROR_INCENTIVE_EXCEEDS_SUPPLY,
        }
    }

    /// Message reported by the simulation views.
    pub fn reason(self) -> &'static [u8] {
        match self {
            UnwindBlocker::NoDebt => REASON_NO_DEBT,
            UnwindBlocker::NothingToUnwind => REASON_NOTHING_TO_UNWIND,
            UnwindBlocker::IncentiveExceedsSupply => REASON_INCENTIVE_EXCEEDS_SUPPLY,
        }
    }
}

/// Partial unwinds performed by PNL and stop loss executors.
///
/// An executor either brings the borrow tokens itself (caller funded) or lets the
/// account source them through a flash swap. The supply spent on settling the debt
/// is the redeemed value the reward percentage applies to: the repay value when
/// the caller pays, the amount owed to the pools otherwise. The executor always
/// receives the full incentive on top.
#[multiversx_sc::module]
pub trait UnwindModule:
    storage::Storage
    + validation::ValidationModule
    + positions::flash::FlashModule
    + helpers::path::PathModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Sizes an unwind of `unwind_factor` of the debt, or returns the reason it cannot run.
    ///
    /// The incentive check prices the settlement at the repay value; a flash swap
    /// that costs more is checked again on execution.
    fn plan_unwind(
        &self,
        cache: &Cache<Self>,
        unwind_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        fixed_reward: &BigUint,
        percentage_reward: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> Result<UnwindPlan<Self::Api>, UnwindBlocker> {
        let debt = cache.borrow_balance();
        if debt == 0 {
            return Err(UnwindBlocker::NoDebt);
        }

        let repay_amount = self.mul_factor(&debt, unwind_factor);
        if repay_amount == 0 {
            return Err(UnwindBlocker::NothingToUnwind);
        }

        let repay_value = cache.borrow_in_supply(&repay_amount);
        let incentive = self.unwind_incentive(&repay_value, fixed_reward, percentage_reward);
        if &repay_value + &incentive > cache.supply_balance() {
            return Err(UnwindBlocker::IncentiveExceedsSupply);
        }

        Ok(UnwindPlan {
            repay_amount,
            repay_value,
        })
    }

    /// Repays part of the debt and pays the executor out of the supply.
    ///
    /// # Payment
    /// - Optional borrow tokens covering the repayment; without them the repayment
    ///   is flash swapped over `path`.
    ///
    /// # Errors
    /// - `ERROR_NO_DEBT`, `ERROR_NOTHING_TO_UNWIND`, `ERROR_INCENTIVE_EXCEEDS_SUPPLY`.
    /// - `ERROR_INVALID_PAYMENT_TOKEN`, `ERROR_INSUFFICIENT_REPAYMENT`: Bad caller funding.
    /// - `ERROR_SLIPPAGE_EXCEEDED`: The flash swap owes more than the repay value plus
    ///   the slippage tolerance.
    fn unwind(
        &self,
        cache: &Cache<Self>,
        executor: &ManagedAddress,
        unwind_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        fixed_reward: &BigUint,
        percentage_reward: &ManagedDecimal<Self::Api, NumDecimals>,
        path: ManagedVec<PathStep<Self::Api>>,
    ) -> UnwindResult<Self::Api> {
        let plan = match self.plan_unwind(cache, unwind_factor, fixed_reward, percentage_reward) {
            Ok(plan) => plan,
            Err(blocker) => sc_panic!(blocker.error()),
        };

        let position = &cache.position;
        let payment = self.call_value().egld_or_single_esdt();
        let caller_funded = payment.amount > 0;

        let settled = if caller_funded {
            require!(
                payment.token_identifier == position.borrow_token,
                ERROR_INVALID_PAYMENT_TOKEN
            );
            require!(
                payment.amount >= plan.repay_amount,
                ERROR_INSUFFICIENT_REPAYMENT
            );

            cache.adapter.repay_borrow(
                &position.platform,
                &position.borrow_token,
                &plan.repay_amount,
            );
            let refund = &payment.amount - &plan.repay_amount;
            if refund > 0 {
                self.tx()
                    .to(executor)
                    .egld_or_single_esdt(&position.borrow_token, 0, &refund)
                    .transfer();
            }
            plan.repay_value.clone()
        } else {
            self.validate_path(&path, &position.borrow_token, &position.supply_token);
            self.execute_flash(
                FlashOperation::Decrease,
                path,
                position.is_same_token(),
                BigUint::zero(),
                plan.repay_amount.clone(),
                self.unwind_slippage_limit(&plan.repay_value),
            )
        };

        let executor_reward = self.unwind_incentive(&settled, fixed_reward, percentage_reward);
        // the flash settlement is already redeemed and paid to the pools
        let payout = if caller_funded {
            &settled + &executor_reward
        } else {
            executor_reward.clone()
        };
        require!(
            payout <= cache.supply_balance(),
            ERROR_INCENTIVE_EXCEEDS_SUPPLY
        );

        if payout > 0 {
            cache
                .adapter
                .redeem_supply(&position.platform, &position.supply_token, &payout);
            self.tx()
                .to(executor)
                .egld_or_single_esdt(&position.supply_token, 0, &payout)
                .transfer();
        }

        let usage = cache.collateral_usage_factor();
        require!(usage <= self.wad(), ERROR_COLLATERAL_USAGE_TOO_HIGH);

        UnwindResult {
            repaid: plan.repay_amount,
            redeemed: settled + &executor_reward,
            executor_reward,
        }
    }
}
