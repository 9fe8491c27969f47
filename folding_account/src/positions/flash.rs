multiversx_sc::imports!();

use common_errors::*;
use common_proxies::proxy_swap_pool::SwapPoolMockProxy;
use common_structs::{FlashContext, FlashOperation, PathStep};

use crate::{adapters::PlatformAdapter, helpers, storage, validation};

/// Two phase flash swap execution.
///
/// The account stores a `FlashContext`, asks the first pool for the tokens it needs
/// and gets called back on `flashSwapCallback` by that pool. Intermediate hops
/// borrow what the previous pool is owed from the next pool, the last hop performs
/// the lending platform operation. Each callback pays its own pool back before
/// returning, so when the outermost call returns every pool is settled.
#[multiversx_sc::module]
pub trait FlashModule:
    storage::Storage
    + validation::ValidationModule
    + helpers::path::PathModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Receives the output of a pool and settles what that pool is owed.
    ///
    /// # Arguments
    /// - `token_owed`: Token the calling pool expects back.
    /// - `amount_owed`: Amount the calling pool expects back.
    ///
    /// # Payment
    /// - The tokens the pool lent to the account.
    ///
    /// # Errors
    /// - `ERROR_INVALID_CALLBACK_CALLER`: No flash in flight or the caller is not the expected pool.
    /// - `ERROR_INVALID_PAYMENT_TOKEN`: The pool sent or asks for a token off the route.
    /// - `ERROR_SLIPPAGE_EXCEEDED`: The final amount owed is above the caller's bound.
    #[payable]
    #[endpoint(flashSwapCallback)]
    fn flash_swap_callback(&self, token_owed: EgldOrEsdtTokenIdentifier, amount_owed: BigUint) {
        let pool = self.blockchain().get_caller();
        require!(!self.flash_context().is_empty(), ERROR_INVALID_CALLBACK_CALLER);
        let mut context = self.flash_context().get();
        require!(pool == context.expected_pool, ERROR_INVALID_CALLBACK_CALLER);

        let received = self.call_value().egld_or_single_esdt();
        require!(
            received.token_identifier == context.path.get(context.hop).token,
            ERROR_INVALID_PAYMENT_TOKEN
        );
        require!(token_owed == context.owed_token(), ERROR_INVALID_PAYMENT_TOKEN);

        if context.is_last_hop() {
            require!(amount_owed <= context.max_payment, ERROR_SLIPPAGE_EXCEEDED);
            self.apply_platform_operation(&context, &amount_owed);

            context.settled_amount = amount_owed.clone();
            context.settled = true;
            self.flash_context().set(&context);
        } else {
            context.hop += 1;
            context.expected_pool = self.pool_for_hop(&context.path, context.hop);
            self.flash_context().set(&context);

            self.tx()
                .to(&context.expected_pool)
                .typed(SwapPoolMockProxy)
                .flash_swap(&token_owed, &amount_owed)
                .sync_call();
        }

        self.tx()
            .to(&pool)
            .egld_or_single_esdt(&token_owed, 0, &amount_owed)
            .transfer();
    }

    /// Runs a flash swap over `path` and returns what the last pool was paid.
    ///
    /// # Arguments
    /// - `operation`: Platform operation performed on the last hop.
    /// - `path`: Validated route, first token is the one borrowed from the first pool.
    /// - `principal_amount`: Owner funds already held by the account.
    /// - `flash_amount`: Amount of the first token to borrow from the first pool.
    /// - `max_payment`: Upper bound on the final amount owed.
    ///
    /// # Errors
    /// - `ERROR_FLASH_NOT_SETTLED`: The pool returned without calling back.
    fn execute_flash(
        &self,
        operation: FlashOperation,
        path: ManagedVec<PathStep<Self::Api>>,
        same_token: bool,
        principal_amount: BigUint,
        flash_amount: BigUint,
        max_payment: BigUint,
    ) -> BigUint {
        let pool = self.pool_for_hop(&path, 0);
        let token_out = path.get(0).token.clone();

        self.flash_context().set(FlashContext {
            operation,
            expected_pool: pool.clone(),
            path,
            hop: 0,
            same_token,
            principal_amount,
            flash_amount: flash_amount.clone(),
            max_payment,
            settled_amount: BigUint::zero(),
            settled: false,
        });

        if same_token {
            self.tx()
                .to(&pool)
                .typed(SwapPoolMockProxy)
                .flash(&token_out, &flash_amount)
                .sync_call();
        } else {
            self.tx()
                .to(&pool)
                .typed(SwapPoolMockProxy)
                .flash_swap(&token_out, &flash_amount)
                .sync_call();
        }

        let context = self.flash_context().take();
        require!(context.settled, ERROR_FLASH_NOT_SETTLED);

        context.settled_amount
    }

    /// Last hop: the account holds the flash amount of the first token and owes
    /// `amount_owed` of the last one.
    fn apply_platform_operation(
        &self,
        context: &FlashContext<Self::Api>,
        amount_owed: &BigUint,
    ) {
        let (position, kind) = self.require_position_initialized();
        let adapter = PlatformAdapter::new(self, kind);

        match context.operation {
            FlashOperation::Increase => {
                let supplied = &context.principal_amount + &context.flash_amount;
                adapter.supply(&position.platform, &position.supply_token, &supplied);
                adapter.borrow(&position.platform, &position.borrow_token, amount_owed);
            },
            FlashOperation::Decrease => {
                adapter.repay_borrow(
                    &position.platform,
                    &position.borrow_token,
                    &context.flash_amount,
                );
                adapter.redeem_supply(&position.platform, &position.supply_token, amount_owed);
            },
        }
    }
}
