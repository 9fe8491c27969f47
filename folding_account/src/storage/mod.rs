use common_structs::{FlashContext, PlatformKind, PnlSetting, PositionConfig, StopLossConfig};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the account owner
    /// The address that owns the position and receives every withdrawal.
    #[view(getAccountOwner)]
    #[storage_mapper("account_owner")]
    fn account_owner(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the position configuration
    /// Platform, supply token and borrow token recorded by the first increase. Empty until then.
    #[view(getPositionConfig)]
    #[storage_mapper("position_config")]
    fn position_config(&self) -> SingleValueMapper<PositionConfig<Self::Api>>;

    /// Get the principal value
    /// Net capital contributed by the owner, in supply token units.
    #[view(getPrincipalValue)]
    #[storage_mapper("principal_value")]
    fn principal_value(&self) -> SingleValueMapper<BigUint>;

    /// Get the PNL settings
    /// Take profit and stop loss price targets. Indexes start at 1, removal swaps the last entry in.
    #[view(getPnlSettings)]
    #[storage_mapper("pnl_settings")]
    fn pnl_settings(&self) -> VecMapper<PnlSetting<Self::Api>>;

    #[storage_mapper("stop_loss_config")]
    fn stop_loss_config(&self) -> SingleValueMapper<StopLossConfig<Self::Api>>;

    /// Get the stop loss executors
    /// Addresses allowed to execute the stop loss while the executor policy is a whitelist.
    #[view(getStopLossExecutors)]
    #[storage_mapper("stop_loss_executors")]
    fn stop_loss_executors(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// In-flight flash swap, only present while a pool is calling back into the account.
    #[storage_mapper("flash_context")]
    fn flash_context(&self) -> SingleValueMapper<FlashContext<Self::Api>>;

    /// Get the registered platforms
    #[view(getPlatforms)]
    #[storage_mapper("platforms")]
    fn platforms(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the platform kind
    /// Selects the adapter used to talk to a registered platform.
    #[view(getPlatformKind)]
    #[storage_mapper("platform_kind")]
    fn platform_kind(&self, platform: &ManagedAddress) -> SingleValueMapper<PlatformKind>;

    /// Get the pool address
    /// Swap pool for a token pair and fee tier. Registered under both token orders.
    #[view(getPoolAddress)]
    #[storage_mapper("pool_address")]
    fn pool_address(
        &self,
        token_a: &EgldOrEsdtTokenIdentifier,
        token_b: &EgldOrEsdtTokenIdentifier,
        fee: u32,
    ) -> SingleValueMapper<ManagedAddress>;

    /// Get the subsidy holder
    #[view(getSubsidyHolder)]
    #[storage_mapper("subsidy_holder")]
    fn subsidy_holder(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the subsidy principal factor
    /// Share of the withdrawn principal paid to the subsidy holder, WAD scaled.
    #[view(getSubsidyPrincipalFactor)]
    #[storage_mapper("subsidy_principal_factor")]
    fn subsidy_principal_factor(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Get the subsidy profit factor
    /// Share of the withdrawn profit paid to the subsidy holder, WAD scaled.
    #[view(getSubsidyProfitFactor)]
    #[storage_mapper("subsidy_profit_factor")]
    fn subsidy_profit_factor(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;
}
