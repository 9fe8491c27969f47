multiversx_sc::imports!();

use common_constants::{MAX_PNL_SETTINGS, REASON_PRICE_TARGET_NOT_REACHED};
use common_errors::*;
use common_structs::{PathStep, PnlSetting, PnlSimulation, UnwindResult};

use crate::{cache::Cache, helpers, positions, storage, triggers, validation};

/// Take profit and stop loss targets on the supply to borrow price ratio.
///
/// The owner stores up to `MAX_PNL_SETTINGS` targets. Once a target is reached any
/// executor may unwind the configured share of the debt and collect the reward;
/// the executed setting is removed.
#[multiversx_sc::module]
pub trait PnlModule:
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
    /// Adds a PNL setting and returns its index.
    ///
    /// # Arguments
    /// - `price_target`: WAD supply to borrow price ratio.
    /// - `is_take_profit`: Fires at or above the target when set, at or below otherwise.
    /// - `fixed_reward`: Executor reward in supply token units.
    /// - `percentage_reward`: Executor reward as a WAD share of the repaid value.
    /// - `unwind_factor`: WAD share of the debt repaid on execution.
    ///
    /// # Errors
    /// - `ERROR_INVALID_PRICE_TARGET`: The target is zero or already reached.
    /// - `ERROR_TOO_MANY_PNL_SETTINGS`: The list is full.
    #[endpoint(configurePnlSetting)]
    fn configure_pnl_setting(
        &self,
        price_target: BigUint,
        is_take_profit: bool,
        fixed_reward: BigUint,
        percentage_reward: BigUint,
        unwind_factor: BigUint,
    ) -> usize {
        self.require_not_busy();
        self.require_account_owner(&self.blockchain().get_caller());
        let (position, kind) = self.require_position_initialized();

        let setting = PnlSetting {
            price_target: self.to_decimal_wad(price_target),
            is_take_profit,
            fixed_reward,
            percentage_reward: self
                .require_unit_factor(percentage_reward, ERROR_INVALID_PERCENTAGE_REWARD),
            unwind_factor: self.require_unit_factor(unwind_factor, ERROR_INVALID_UNWIND_FACTOR),
        };
        require!(
            setting.price_target > self.wad_zero(),
            ERROR_INVALID_PRICE_TARGET
        );

        let cache = Cache::new(self, position, kind);
        require!(
            setting.is_ahead_of(&cache.price_ratio()),
            ERROR_INVALID_PRICE_TARGET
        );
        require!(
            self.pnl_settings().len() < MAX_PNL_SETTINGS,
            ERROR_TOO_MANY_PNL_SETTINGS
        );

        let index = self.pnl_settings().push(&setting);
        self.add_pnl_setting_event(index, &setting);
        index
    }

    /// Removes a setting; the last one takes its index.
    #[endpoint(removePnlSetting)]
    fn remove_pnl_setting(&self, index: usize) {
        self.require_not_busy();
        self.require_account_owner(&self.blockchain().get_caller());
        self.require_pnl_index(index);

        self.pnl_settings().swap_remove(index);
        self.remove_pnl_setting_event(index);
    }

    #[endpoint(removeAllPnlSettings)]
    fn remove_all_pnl_settings(&self) {
        self.require_not_busy();
        self.require_account_owner(&self.blockchain().get_caller());

        for index in (1..=self.pnl_settings().len()).rev() {
            self.remove_pnl_setting_event(index);
        }
        self.pnl_settings().clear();
    }

    /// Executes a reached PNL setting.
    ///
    /// # Arguments
    /// - `index`: Setting index.
    /// - `path`: Route from the borrow token to the supply token, used without payment.
    ///
    /// # Payment
    /// - Optional borrow tokens repaying the debt directly.
    ///
    /// # Errors
    /// - `ERROR_INVALID_PNL_INDEX`: No setting at `index`.
    /// - `ERROR_PRICE_TARGET_NOT_REACHED`: The price ratio is on the wrong side of the target.
    #[payable]
    #[endpoint(executePnl)]
    fn execute_pnl(
        &self,
        index: usize,
        path: ManagedVec<PathStep<Self::Api>>,
    ) -> UnwindResult<Self::Api> {
        self.require_not_busy();
        self.require_pnl_index(index);
        let (position, kind) = self.require_position_initialized();
        let cache = Cache::new(self, position, kind);

        let setting = self.pnl_settings().get(index);
        require!(
            setting.is_reached(&cache.price_ratio()),
            ERROR_PRICE_TARGET_NOT_REACHED
        );

        let executor = self.blockchain().get_caller();
        let result = self.unwind(
            &cache,
            &executor,
            &setting.unwind_factor,
            &setting.fixed_reward,
            &setting.percentage_reward,
            path,
        );

        self.pnl_settings().swap_remove(index);
        self.execute_pnl_event(&executor, index, &result);
        result
    }

    /// Whether each stored setting could be executed right now, in index order.
    #[view(simulatePnl)]
    fn simulate_pnl(&self) -> MultiValueEncoded<PnlSimulation<Self::Api>> {
        let mut simulations = MultiValueEncoded::new();
        if self.position_config().is_empty() || self.pnl_settings().is_empty() {
            return simulations;
        }

        let (position, kind) = self.require_position_initialized();
        let cache = Cache::new(self, position, kind);
        let ratio = cache.price_ratio();

        for setting in self.pnl_settings().iter() {
            let simulation = if !setting.is_reached(&ratio) {
                PnlSimulation::blocked(REASON_PRICE_TARGET_NOT_REACHED)
            } else {
                match self.plan_unwind(
                    &cache,
                    &setting.unwind_factor,
                    &setting.fixed_reward,
                    &setting.percentage_reward,
                ) {
                    Ok(_) => PnlSimulation::triggerable(),
                    Err(blocker) => PnlSimulation::blocked(blocker.reason()),
                }
            };
            simulations.push(simulation);
        }

        simulations
    }

    fn require_pnl_index(&self, index: usize) {
        require!(
            index >= 1 && index <= self.pnl_settings().len(),
            ERROR_INVALID_PNL_INDEX
        );
    }
}
