multiversx_sc::imports!();

use common_constants::MAX_AMOUNT;
use common_errors::*;
use common_structs::{DecreaseResult, FlashOperation, PathStep, SubsidySplit};

use crate::{cache::Cache, helpers, positions, storage, validation};

#[multiversx_sc::module]
pub trait PositionDecreaseModule:
    storage::Storage
    + validation::ValidationModule
    + positions::flash::FlashModule
    + helpers::path::PathModule
    + helpers::math::MathsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Repays debt through a flash swap, then withdraws supply to the owner.
    ///
    /// # Arguments
    /// - `cache`: Position cache.
    /// - `withdraw_amount`: Supply tokens to withdraw, `MAX_AMOUNT` for everything left.
    /// - `repay_amount`: Debt to repay, `MAX_AMOUNT` or anything above the debt repays all of it.
    /// - `max_supply_repay_amount`: Upper bound on the supply tokens redeemed for the flash swap.
    /// - `path`: Route from the borrow token to the supply token, ignored without repayment.
    ///
    /// # Errors
    /// - `ERROR_COLLATERAL_USAGE_TOO_HIGH`: The withdrawal leaves the position above a factor of one.
    fn process_decrease(
        &self,
        cache: &Cache<Self>,
        withdraw_amount: BigUint,
        repay_amount: BigUint,
        max_supply_repay_amount: BigUint,
        path: ManagedVec<PathStep<Self::Api>>,
    ) -> DecreaseResult<Self::Api> {
        let position = &cache.position;
        let max_amount = BigUint::from(MAX_AMOUNT);

        let debt = cache.borrow_balance();
        let repaid = if repay_amount == max_amount || repay_amount > debt {
            debt
        } else {
            repay_amount
        };

        let redeemed_for_repayment = if repaid > 0 {
            self.validate_path(&path, &position.borrow_token, &position.supply_token);
            self.execute_flash(
                FlashOperation::Decrease,
                path,
                position.is_same_token(),
                BigUint::zero(),
                repaid.clone(),
                max_supply_repay_amount,
            )
        } else {
            BigUint::zero()
        };

        let supply_balance = cache.supply_balance();
        let withdrawn = if withdraw_amount == max_amount {
            supply_balance.clone()
        } else {
            withdraw_amount
        };

        let split = if withdrawn > 0 {
            let position_value = cache.position_value_of(&supply_balance, &cache.borrow_balance());
            cache
                .adapter
                .redeem_supply(&position.platform, &position.supply_token, &withdrawn);
            self.pay_out_withdrawal(&position.supply_token, &withdrawn, &position_value)
        } else {
            SubsidySplit {
                principal_reduced: BigUint::zero(),
                principal_tax: BigUint::zero(),
                profit_tax: BigUint::zero(),
                user_amount: BigUint::zero(),
            }
        };

        let usage = cache.collateral_usage_factor();
        require!(usage <= self.wad(), ERROR_COLLATERAL_USAGE_TOO_HIGH);

        let caller = self.blockchain().get_caller();
        self.decrease_position_event(
            &caller,
            &repaid,
            &redeemed_for_repayment,
            &withdrawn,
            &usage,
        );

        DecreaseResult {
            repaid,
            redeemed_for_repayment,
            withdrawn,
            user_amount: split.user_amount,
            principal_tax: split.principal_tax,
            profit_tax: split.profit_tax,
        }
    }

    /// Sends a withdrawal to the owner minus the subsidy and reduces the principal.
    ///
    /// # Arguments
    /// - `token`: Supply token.
    /// - `withdrawn`: Amount redeemed from the platform.
    /// - `position_value`: Position value before the withdrawal, in supply token units.
    fn pay_out_withdrawal(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        withdrawn: &BigUint,
        position_value: &BigUint,
    ) -> SubsidySplit<Self::Api> {
        let principal = self.principal_value().get();
        let split = self.split_withdrawal(
            withdrawn,
            position_value,
            &principal,
            &self.subsidy_principal_factor().get(),
            &self.subsidy_profit_factor().get(),
        );

        self.principal_value()
            .set(self.checked_sub(&principal, &split.principal_reduced));

        if split.user_amount > 0 {
            self.tx()
                .to(&self.account_owner().get())
                .egld_or_single_esdt(token, 0, &split.user_amount)
                .transfer();
        }

        let tax = split.total_tax();
        if tax > 0 {
            let holder = self.subsidy_holder().get();
            self.tx()
                .to(&holder)
                .egld_or_single_esdt(token, 0, &tax)
                .transfer();
            self.subsidy_paid_event(&holder, token, &split.principal_tax, &split.profit_tax);
        }

        split
    }
}
