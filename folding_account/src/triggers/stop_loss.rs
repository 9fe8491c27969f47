multiversx_sc::imports!();

use common_constants::{REASON_COLLATERAL_USAGE_BELOW_LIMIT, REASON_STOP_LOSS_NOT_CONFIGURED};
use common_errors::*;
use common_structs::{
    ExecutorPolicy, PathStep, PnlSimulation, StopLossConfig, UnwindResult,
};

use crate::{cache::Cache, helpers, positions, storage, triggers, validation};

/// Collateral usage based stop loss.
///
/// Once the collateral usage factor rises above the configured limit, an allowed
/// executor unwinds a share of the debt and keeps the slippage incentive. The
/// configuration stays in place after an execution.
#[multiversx_sc::module]
pub trait StopLossModule:
    storage::Storage
    + validation::ValidationModule
    + triggers::unwind::UnwindModule
    + positions::flash::FlashModule
    + helpers::path::PathModule
    + helpers::math::MathsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Stores the stop loss configuration, replacing any previous one.
    ///
    /// # Arguments
    /// - `unwind_factor`: WAD share of the debt repaid on execution.
    /// - `slippage_incentive`: WAD share of the repaid value left to the executor.
    /// - `collateral_usage_limit`: WAD collateral usage factor above which execution is allowed.
    /// - `open_to_anyone`: Lets any address execute instead of the whitelist only.
    ///
    /// # Errors
    /// - `ERROR_INVALID_COLLATERAL_USAGE_LIMIT`: Above one or below the current factor.
    #[endpoint(configureStopLoss)]
    fn configure_stop_loss(
        &self,
        unwind_factor: BigUint,
        slippage_incentive: BigUint,
        collateral_usage_limit: BigUint,
        open_to_anyone: bool,
    ) {
        self.require_not_busy();
        self.require_account_owner(&self.blockchain().get_caller());
        let (position, kind) = self.require_position_initialized();

        let config = StopLossConfig {
            unwind_factor: self.require_unit_factor(unwind_factor, ERROR_INVALID_UNWIND_FACTOR),
            slippage_incentive: self
                .require_unit_factor(slippage_incentive, ERROR_INVALID_SLIPPAGE_INCENTIVE),
            collateral_usage_limit: self.require_unit_factor(
                collateral_usage_limit,
                ERROR_INVALID_COLLATERAL_USAGE_LIMIT,
            ),
            executor_policy: if open_to_anyone {
                ExecutorPolicy::Anyone
            } else {
                ExecutorPolicy::Whitelist
            },
        };

        let cache = Cache::new(self, position, kind);
        require!(
            config.collateral_usage_limit >= cache.collateral_usage_factor(),
            ERROR_INVALID_COLLATERAL_USAGE_LIMIT
        );

        self.stop_loss_config().set(&config);
        self.configure_stop_loss_event(&config);
    }

    #[endpoint(allowStopLossExecutor)]
    fn allow_stop_loss_executor(&self, executor: ManagedAddress) {
        self.require_not_busy();
        self.require_account_owner(&self.blockchain().get_caller());
        require!(!executor.is_zero(), ERROR_INVALID_ADDRESS);

        self.stop_loss_executors().insert(executor.clone());
        self.stop_loss_executor_event(&executor, true);
    }

    #[endpoint(revokeStopLossExecutor)]
    fn revoke_stop_loss_executor(&self, executor: ManagedAddress) {
        self.require_not_busy();
        self.require_account_owner(&self.blockchain().get_caller());

        self.stop_loss_executors().swap_remove(&executor);
        self.stop_loss_executor_event(&executor, false);
    }

    /// Executes the stop loss while the collateral usage factor is above the limit.
    ///
    /// # Arguments
    /// - `path`: Route from the borrow token to the supply token, used without payment.
    ///
    /// # Payment
    /// - Optional borrow tokens repaying the debt directly.
    ///
    /// # Errors
    /// - `ERROR_STOP_LOSS_NOT_CONFIGURED`: Nothing configured.
    /// - `ERROR_NOT_AUTHORIZED_EXECUTOR`: Whitelist policy and caller not on it.
    /// - `ERROR_COLLATERAL_USAGE_BELOW_LIMIT`: The limit is not exceeded.
    #[payable]
    #[endpoint(executeStopLoss)]
    fn execute_stop_loss(&self, path: ManagedVec<PathStep<Self::Api>>) -> UnwindResult<Self::Api> {
        self.require_not_busy();
        require!(
            !self.stop_loss_config().is_empty(),
            ERROR_STOP_LOSS_NOT_CONFIGURED
        );
        let config = self.stop_loss_config().get();

        let executor = self.blockchain().get_caller();
        if !config.is_open_to_anyone() {
            require!(
                self.stop_loss_executors().contains(&executor),
                ERROR_NOT_AUTHORIZED_EXECUTOR
            );
        }

        let (position, kind) = self.require_position_initialized();
        let cache = Cache::new(self, position, kind);
        let usage = cache.collateral_usage_factor();
        require!(
            config.is_breached(&usage),
            ERROR_COLLATERAL_USAGE_BELOW_LIMIT
        );

        let result = self.unwind(
            &cache,
            &executor,
            &config.unwind_factor,
            &BigUint::zero(),
            &config.slippage_incentive,
            path,
        );

        self.execute_stop_loss_event(&executor, &usage, &result);
        result
    }

    /// Current configuration, all zero with a whitelist policy when none is set.
    #[view(getStopLossConfig)]
    fn get_stop_loss_config(&self) -> StopLossConfig<Self::Api> {
        if self.stop_loss_config().is_empty() {
            return StopLossConfig::zero();
        }
        self.stop_loss_config().get()
    }

    #[view(isStopLossExecutor)]
    fn is_stop_loss_executor(&self, executor: ManagedAddress) -> bool {
        self.stop_loss_executors().contains(&executor)
    }

    /// Whether the stop loss could be executed right now by an allowed executor.
    #[view(simulateStopLoss)]
    fn simulate_stop_loss(&self) -> PnlSimulation<Self::Api> {
        if self.stop_loss_config().is_empty() || self.position_config().is_empty() {
            return PnlSimulation::blocked(REASON_STOP_LOSS_NOT_CONFIGURED);
        }
        let config = self.stop_loss_config().get();

        let (position, kind) = self.require_position_initialized();
        let cache = Cache::new(self, position, kind);
        if !config.is_breached(&cache.collateral_usage_factor()) {
            return PnlSimulation::blocked(REASON_COLLATERAL_USAGE_BELOW_LIMIT);
        }

        match self.plan_unwind(
            &cache,
            &config.unwind_factor,
            &BigUint::zero(),
            &config.slippage_incentive,
        ) {
            Ok(_) => PnlSimulation::triggerable(),
            Err(blocker) => PnlSimulation::blocked(blocker.reason()),
        }
    }
}
