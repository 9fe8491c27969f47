multiversx_sc::imports!();

use common_errors::*;
use common_structs::{FlashOperation, IncreaseResult, PathStep, PlatformKind, PositionConfig};

use crate::{adapters::PlatformAdapter, cache::Cache, helpers, positions, storage, validation};

#[multiversx_sc::module]
pub trait PositionIncreaseModule:
    storage::Storage
    + validation::ValidationModule
    + positions::flash::FlashModule
    + helpers::path::PathModule
    + helpers::math::MathsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Opens the position on first use, otherwise checks the caller and the recorded
    /// platform and tokens.
    ///
    /// # Errors
    /// - `ERROR_NOT_ACCOUNT_OWNER`: Caller is neither the owner nor, before opening, the registry.
    /// - `ERROR_PLATFORM_MISMATCH`, `ERROR_SUPPLY_TOKEN_MISMATCH`, `ERROR_BORROW_TOKEN_MISMATCH`.
    fn open_or_load_position(
        &self,
        caller: &ManagedAddress,
        platform: &ManagedAddress,
        supply_token: &EgldOrEsdtTokenIdentifier,
        borrow_token: &EgldOrEsdtTokenIdentifier,
    ) -> (PositionConfig<Self::Api>, PlatformKind) {
        if !self.position_config().is_empty() {
            self.require_account_owner(caller);
            let (position, kind) = self.require_position_initialized();
            self.require_position_matches(&position, platform, supply_token, borrow_token);
            return (position, kind);
        }

        self.require_owner_or_registry(caller);
        let kind = self.require_platform_registered(platform);
        let position = PositionConfig {
            platform: platform.clone(),
            supply_token: supply_token.clone(),
            borrow_token: borrow_token.clone(),
        };
        self.position_config().set(&position);

        let mut markets = ManagedVec::new();
        markets.push(supply_token.clone());
        if !position.is_same_token() {
            markets.push(borrow_token.clone());
        }
        PlatformAdapter::new(self, kind).enter_markets(platform, &markets);

        self.open_position_event(&position);
        (position, kind)
    }

    /// Supplies `principal + flash_amount` and borrows what the flash swap costs.
    ///
    /// # Arguments
    /// - `cache`: Position cache.
    /// - `principal`: Owner funds attached to the call, already validated.
    /// - `flash_amount`: Supply tokens obtained through the flash swap.
    /// - `max_borrow_amount`: Upper bound on the borrow token amount owed.
    /// - `path`: Route from the supply token to the borrow token.
    ///
    /// # Errors
    /// - `ERROR_COLLATERAL_USAGE_DECREASED`: Leverage only increase lowered the collateral usage factor.
    /// - `ERROR_COLLATERAL_USAGE_TOO_HIGH`: The collateral usage factor ends above one.
    fn process_increase(
        &self,
        cache: &Cache<Self>,
        principal: &BigUint,
        flash_amount: &BigUint,
        max_borrow_amount: BigUint,
        path: ManagedVec<PathStep<Self::Api>>,
    ) -> IncreaseResult<Self::Api> {
        let position = &cache.position;
        let usage_before = cache.collateral_usage_factor();

        let borrowed = if flash_amount == &0u64 {
            if principal > &0u64 {
                cache
                    .adapter
                    .supply(&position.platform, &position.supply_token, principal);
            }
            BigUint::zero()
        } else {
            self.validate_path(&path, &position.supply_token, &position.borrow_token);
            self.execute_flash(
                FlashOperation::Increase,
                path,
                position.is_same_token(),
                principal.clone(),
                flash_amount.clone(),
                max_borrow_amount,
            )
        };

        if principal > &0u64 {
            self.principal_value().update(|value| *value += principal);
        }

        let usage_after = cache.collateral_usage_factor();
        if principal == &0u64 && flash_amount > &0u64 {
            require!(
                usage_after >= usage_before,
                ERROR_COLLATERAL_USAGE_DECREASED
            );
        }
        require!(usage_after <= self.wad(), ERROR_COLLATERAL_USAGE_TOO_HIGH);

        let caller = self.blockchain().get_caller();
        self.increase_position_event(
            &caller,
            principal,
            &(principal + flash_amount),
            &borrowed,
            &usage_after,
        );

        IncreaseResult {
            supplied: principal + flash_amount,
            borrowed,
        }
    }
}
