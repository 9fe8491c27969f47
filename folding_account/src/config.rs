multiversx_sc::imports!();

use crate::helpers;
use crate::storage;
use common_constants::FEE_PRECISION;
use common_errors::*;
use common_structs::PlatformKind;

/// Registry side configuration of a folding account.
///
/// The contract owner acts as the registry: it decides which lending platforms and
/// swap pools the account may talk to and who collects the withdrawal subsidy.
/// Nothing here touches the position itself.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + common_events::EventsModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
{
    /// Registers a lending platform and the adapter family used to talk to it.
    /// Registering an address again replaces its kind.
    ///
    /// # Arguments
    /// - `platform`: Comptroller or pool address of the platform.
    /// - `kind`: Adapter family.
    #[only_owner]
    #[endpoint(registerPlatform)]
    fn register_platform(&self, platform: ManagedAddress, kind: PlatformKind) {
        require!(!platform.is_zero(), ERROR_INVALID_ADDRESS);

        self.platforms().insert(platform.clone());
        self.platform_kind(&platform).set(kind);

        self.register_platform_event(&platform, kind);
    }

    /// Registers the swap pool serving a token pair at a fee tier.
    ///
    /// # Arguments
    /// - `token_a`, `token_b`: Pool tokens, in any order.
    /// - `fee`: Fee tier in hundredths of a basis point.
    /// - `pool`: Pool address.
    #[only_owner]
    #[endpoint(registerPool)]
    fn register_pool(
        &self,
        token_a: EgldOrEsdtTokenIdentifier,
        token_b: EgldOrEsdtTokenIdentifier,
        fee: u32,
        pool: ManagedAddress,
    ) {
        require!(token_a != token_b, ERROR_INVALID_PATH);
        require!(fee < FEE_PRECISION, ERROR_INVALID_FEE_TIER);
        require!(!pool.is_zero(), ERROR_INVALID_ADDRESS);

        self.pool_address(&token_a, &token_b, fee).set(&pool);
        self.pool_address(&token_b, &token_a, fee).set(&pool);

        self.register_pool_event(&token_a, &token_b, fee, &pool);
    }

    /// Updates who receives the withdrawal subsidy and how much of it.
    ///
    /// # Arguments
    /// - `holder`: Subsidy receiver.
    /// - `principal_factor`: WAD share of withdrawn principal.
    /// - `profit_factor`: WAD share of withdrawn profit.
    #[only_owner]
    #[endpoint(setSubsidyConfig)]
    fn set_subsidy_config(
        &self,
        holder: ManagedAddress,
        principal_factor: BigUint,
        profit_factor: BigUint,
    ) {
        self.store_subsidy_config(holder, principal_factor, profit_factor);
    }

    fn store_subsidy_config(
        &self,
        holder: ManagedAddress,
        principal_factor: BigUint,
        profit_factor: BigUint,
    ) {
        require!(!holder.is_zero(), ERROR_INVALID_ADDRESS);
        let principal_factor = self.to_decimal_wad(principal_factor);
        let profit_factor = self.to_decimal_wad(profit_factor);
        require!(principal_factor <= self.wad(), ERROR_INVALID_SUBSIDY_FACTOR);
        require!(profit_factor <= self.wad(), ERROR_INVALID_SUBSIDY_FACTOR);

        self.subsidy_holder().set(&holder);
        self.subsidy_principal_factor().set(&principal_factor);
        self.subsidy_profit_factor().set(&profit_factor);

        self.subsidy_config_event(&holder, &principal_factor, &profit_factor);
    }
}
