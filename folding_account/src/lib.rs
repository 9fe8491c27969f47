#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod adapters;
pub mod cache;
pub mod config;
pub mod helpers;
pub mod positions;
pub mod storage;
pub mod triggers;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

/// One leveraged position on one lending platform, owned by a single account owner.
///
/// Leverage is added and removed atomically through flash swaps on registered
/// pools. The contract owner acts as the registry that configures platforms, pools
/// and the withdrawal subsidy.
#[multiversx_sc::contract]
pub trait FoldingAccount:
    positions::account::PositionAccountModule
    + positions::increase::PositionIncreaseModule
    + positions::decrease::PositionDecreaseModule
    + positions::flash::FlashModule
    + triggers::unwind::UnwindModule
    + triggers::pnl::PnlModule
    + triggers::stop_loss::StopLossModule
    + config::ConfigModule
    + common_events::EventsModule
    + storage::Storage
    + validation::ValidationModule
    + views::ViewsModule
    + helpers::path::PathModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the account for its owner.
    ///
    /// # Arguments
    /// - `account_owner`: Owner of the position.
    /// - `subsidy_holder`: Receiver of the withdrawal subsidy.
    /// - `subsidy_principal_factor`: WAD share of withdrawn principal paid as subsidy.
    /// - `subsidy_profit_factor`: WAD share of withdrawn profit paid as subsidy.
    #[init]
    fn init(
        &self,
        account_owner: ManagedAddress,
        subsidy_holder: ManagedAddress,
        subsidy_principal_factor: BigUint,
        subsidy_profit_factor: BigUint,
    ) {
        require!(!account_owner.is_zero(), ERROR_INVALID_ADDRESS);
        self.account_owner().set(&account_owner);
        self.principal_value().set(BigUint::zero());
        self.store_subsidy_config(subsidy_holder, subsidy_principal_factor, subsidy_profit_factor);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Opens the position or adds to it. The attached payment is new principal, the
    /// rest of `supply_amount` is flash swapped from the borrow token.
    ///
    /// # Arguments
    /// - `platform`: Lending platform, fixed by the first call.
    /// - `supply_token`: Collateral token, fixed by the first call.
    /// - `borrow_token`: Debt token, fixed by the first call.
    /// - `supply_amount`: Total supply tokens added to the platform.
    /// - `max_borrow_amount`: Upper bound on the borrow tokens owed to the pools.
    /// - `path`: Route from the supply token to the borrow token.
    ///
    /// # Payment
    /// - Optional supply tokens, the new principal.
    ///
    /// # Errors
    /// - `ERROR_SUPPLY_TOKEN_MISMATCH`: The payment is not the supply token.
    /// - `ERROR_INSUFFICIENT_SUPPLY`: `supply_amount` is zero or below the payment.
    #[payable]
    #[endpoint(increasePositionWithFlashSwap)]
    fn increase_position_with_flash_swap(
        &self,
        platform: ManagedAddress,
        supply_token: EgldOrEsdtTokenIdentifier,
        borrow_token: EgldOrEsdtTokenIdentifier,
        supply_amount: BigUint,
        max_borrow_amount: BigUint,
        path: ManagedVec<PathStep<Self::Api>>,
    ) -> IncreaseResult<Self::Api> {
        self.require_not_busy();
        let caller = self.blockchain().get_caller();

        let payment = self.call_value().egld_or_single_esdt();
        let principal = payment.amount.clone();
        if principal > 0 {
            require!(
                payment.token_identifier == supply_token,
                ERROR_SUPPLY_TOKEN_MISMATCH
            );
        }
        require!(
            supply_amount > 0 && supply_amount >= principal,
            ERROR_INSUFFICIENT_SUPPLY
        );
        let flash_amount = &supply_amount - &principal;

        let (position, kind) =
            self.open_or_load_position(&caller, &platform, &supply_token, &borrow_token);
        let cache = Cache::new(self, position, kind);

        self.process_increase(&cache, &principal, &flash_amount, max_borrow_amount, path)
    }

    /// Repays debt through a flash swap and withdraws supply to the owner, minus the
    /// subsidy. Passing `MAX_AMOUNT` for both amounts closes the position.
    ///
    /// # Arguments
    /// - `platform`, `supply_token`, `borrow_token`: Must match the open position.
    /// - `withdraw_amount`: Supply tokens sent out, `MAX_AMOUNT` for all of them.
    /// - `borrow_token_repay_amount`: Debt repaid, `MAX_AMOUNT` for all of it.
    /// - `max_supply_token_repay_amount`: Upper bound on the supply tokens owed to the pools.
    /// - `path`: Route from the borrow token to the supply token.
    ///
    /// # Errors
    /// - `ERROR_NOT_ACCOUNT_OWNER`: Caller is not the owner.
    /// - `ERROR_POSITION_NOT_INITIALIZED`: Nothing was opened.
    #[endpoint(decreasePositionWithFlashSwap)]
    fn decrease_position_with_flash_swap(
        &self,
        platform: ManagedAddress,
        supply_token: EgldOrEsdtTokenIdentifier,
        borrow_token: EgldOrEsdtTokenIdentifier,
        withdraw_amount: BigUint,
        borrow_token_repay_amount: BigUint,
        max_supply_token_repay_amount: BigUint,
        path: ManagedVec<PathStep<Self::Api>>,
    ) -> DecreaseResult<Self::Api> {
        self.require_not_busy();
        self.require_account_owner(&self.blockchain().get_caller());
        let (position, kind) = self.require_position_initialized();
        self.require_position_matches(&position, &platform, &supply_token, &borrow_token);

        let cache = Cache::new(self, position, kind);
        self.process_decrease(
            &cache,
            withdraw_amount,
            borrow_token_repay_amount,
            max_supply_token_repay_amount,
            path,
        )
    }
}
