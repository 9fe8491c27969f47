multiversx_sc::imports!();

use common_errors::*;
use common_structs::{PlatformKind, PositionConfig};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule:
    storage::Storage
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Rejects state changes while the registry paused the account or a flash swap is
    /// calling back into it.
    ///
    /// # Errors
    /// - `ERROR_FLASH_IN_PROGRESS`: A flash context is stored.
    fn require_not_busy(&self) {
        self.require_not_paused();
        require!(self.flash_context().is_empty(), ERROR_FLASH_IN_PROGRESS);
    }

    fn require_account_owner(&self, caller: &ManagedAddress) {
        require!(
            caller == &self.account_owner().get(),
            ERROR_NOT_ACCOUNT_OWNER
        );
    }

    /// The account owner, or the registry that deployed the account.
    fn require_owner_or_registry(&self, caller: &ManagedAddress) {
        require!(
            caller == &self.account_owner().get()
                || caller == &self.blockchain().get_owner_address(),
            ERROR_NOT_ACCOUNT_OWNER
        );
    }

    /// Looks up the adapter family of a platform.
    ///
    /// # Errors
    /// - `ERROR_PLATFORM_NOT_REGISTERED`: The registry never registered `platform`.
    fn require_platform_registered(&self, platform: &ManagedAddress) -> PlatformKind {
        require!(
            self.platforms().contains(platform),
            ERROR_PLATFORM_NOT_REGISTERED
        );
        self.platform_kind(platform).get()
    }

    /// Loads the recorded position together with its platform kind.
    ///
    /// # Errors
    /// - `ERROR_POSITION_NOT_INITIALIZED`: No increase ever opened the position.
    fn require_position_initialized(&self) -> (PositionConfig<Self::Api>, PlatformKind) {
        require!(
            !self.position_config().is_empty(),
            ERROR_POSITION_NOT_INITIALIZED
        );
        let position = self.position_config().get();
        let kind = self.require_platform_registered(&position.platform);
        (position, kind)
    }

    fn require_position_matches(
        &self,
        position: &PositionConfig<Self::Api>,
        platform: &ManagedAddress,
        supply_token: &EgldOrEsdtTokenIdentifier,
        borrow_token: &EgldOrEsdtTokenIdentifier,
    ) {
        require!(&position.platform == platform, ERROR_PLATFORM_MISMATCH);
        require!(
            &position.supply_token == supply_token,
            ERROR_SUPPLY_TOKEN_MISMATCH
        );
        require!(
            &position.borrow_token == borrow_token,
            ERROR_BORROW_TOKEN_MISMATCH
        );
    }

    /// Converts a raw WAD argument and checks it lies in `[0, 1]`.
    fn require_unit_factor(
        &self,
        value: BigUint,
        error: &'static [u8],
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let factor = self.to_decimal_wad(value);
        require!(factor <= self.wad(), error);
        factor
    }
}
