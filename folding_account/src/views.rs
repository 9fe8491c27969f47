multiversx_sc::imports!();

use common_structs::{AssetMetadata, PositionSnapshot};

use crate::{adapters::PlatformAdapter, cache::Cache, helpers, storage, validation};

/// Read only lens over the position and the registered platforms.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Live balances, values and prices of the position.
    #[view(getPositionSnapshot)]
    fn get_position_snapshot(&self) -> PositionSnapshot<Self::Api> {
        let (position, kind) = self.require_position_initialized();
        let cache = Cache::new(self, position, kind);

        let supply_balance = cache.supply_balance();
        let borrow_balance = cache.borrow_balance();

        PositionSnapshot {
            platform: cache.position.platform.clone(),
            supply_token: cache.position.supply_token.clone(),
            borrow_token: cache.position.borrow_token.clone(),
            position_value: cache.position_value_of(&supply_balance, &borrow_balance),
            collateral_usage_factor: cache
                .collateral_usage_factor_of(&supply_balance, &borrow_balance),
            supply_balance,
            borrow_balance,
            principal_value: self.principal_value().get(),
            supply_price: cache.supply_price.clone(),
            borrow_price: cache.borrow_price.clone(),
        }
    }

    /// Collateral usage factor of the position, borrow value over supply value. Zero
    /// before the position is opened.
    #[view(getCollateralUsageFactor)]
    fn get_collateral_usage_factor(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.position_config().is_empty() {
            return self.wad_zero();
        }
        let (position, kind) = self.require_position_initialized();
        Cache::new(self, position, kind).collateral_usage_factor()
    }

    /// Supply token price over borrow token price, WAD scaled. Zero before the
    /// position is opened.
    #[view(getPriceRatio)]
    fn get_price_ratio(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.position_config().is_empty() {
            return self.wad_zero();
        }
        let (position, kind) = self.require_position_initialized();
        Cache::new(self, position, kind).price_ratio()
    }

    #[view(getAssetMetadata)]
    fn get_asset_metadata(
        &self,
        platform: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
    ) -> AssetMetadata<Self::Api> {
        let kind = self.require_platform_registered(&platform);
        PlatformAdapter::new(self, kind).asset_metadata(&platform, &token)
    }

    /// WAD price of one whole `token` as reported by `platform`.
    #[view(getReferencePrice)]
    fn get_reference_price(
        &self,
        platform: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let kind = self.require_platform_registered(&platform);
        PlatformAdapter::new(self, kind).reference_price(&platform, &token)
    }

    #[view(getCollateralFactor)]
    fn get_collateral_factor(
        &self,
        platform: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let kind = self.require_platform_registered(&platform);
        PlatformAdapter::new(self, kind).collateral_factor(&platform, &token)
    }

    /// Account wide factor computed by the platform itself, collateral factors included.
    #[view(getPlatformCollateralUsageFactor)]
    fn get_platform_collateral_usage_factor(
        &self,
        platform: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let kind = self.require_platform_registered(&platform);
        PlatformAdapter::new(self, kind).collateral_usage_factor(&platform)
    }

    #[view(isFlashInProgress)]
    fn is_flash_in_progress(&self) -> bool {
        !self.flash_context().is_empty()
    }
}
