use core::ops::Deref;

use common_structs::{AssetMetadata, PlatformKind};

multiversx_sc::imports!();

pub mod aave;
pub mod compound;
pub mod venus;

pub use aave::AaveAdapter;
pub use compound::CompoundForkAdapter;
pub use venus::VenusAdapter;

/// Uniform view of a lending platform as seen by the folding account.
///
/// Balances are those of the account contract itself. Prices and factors are WAD
/// scaled, prices being the value of one whole token whatever its decimals.
/// Platform failures are not caught and abort the transaction with the platform's
/// own message.
pub trait LendingPlatform<M: ManagedTypeApi> {
    fn supply(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
        amount: &BigUint<M>,
    );

    fn borrow(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
        amount: &BigUint<M>,
    );

    fn redeem_supply(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
        amount: &BigUint<M>,
    );

    /// Returns the amount actually applied to the debt.
    fn repay_borrow(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
        amount: &BigUint<M>,
    ) -> BigUint<M>;

    fn supply_balance(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
    ) -> BigUint<M>;

    fn borrow_balance(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
    ) -> BigUint<M>;

    fn reference_price(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
    ) -> ManagedDecimal<M, NumDecimals>;

    fn token_decimals(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
    ) -> usize;

    fn collateral_factor(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
    ) -> ManagedDecimal<M, NumDecimals>;

    /// Account wide borrow value over collateral weighted supply value.
    fn collateral_usage_factor(&self, platform: &ManagedAddress<M>)
        -> ManagedDecimal<M, NumDecimals>;

    fn asset_metadata(
        &self,
        platform: &ManagedAddress<M>,
        token: &EgldOrEsdtTokenIdentifier<M>,
    ) -> AssetMetadata<M>;

    fn enter_markets(
        &self,
        platform: &ManagedAddress<M>,
        tokens: &ManagedVec<M, EgldOrEsdtTokenIdentifier<M>>,
    );

    /// Claims everything the account earned and returns what arrived.
    fn claim_rewards(&self, platform: &ManagedAddress<M>) -> EgldOrEsdtTokenPayment<M>;
}

/// Adapter selected from the kind a platform was registered with.
pub enum PlatformAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    CompoundFork(CompoundForkAdapter<'a, C>),
    Aave(AaveAdapter<'a, C>),
    Venus(VenusAdapter<'a, C>),
}

impl<'a, C> PlatformAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    pub fn new(sc_ref: &'a C, kind: PlatformKind) -> Self {
        match kind {
            PlatformKind::CompoundFork => {
                PlatformAdapter::CompoundFork(CompoundForkAdapter::new(sc_ref))
            },
            PlatformKind::Aave => PlatformAdapter::Aave(AaveAdapter::new(sc_ref)),
            PlatformKind::Venus => PlatformAdapter::Venus(VenusAdapter::new(sc_ref)),
        }
    }
}

impl<'a, C> Deref for PlatformAdapter<'a, C>
where
    C: common_math::SharedMathModule + 'a,
{
    type Target = dyn LendingPlatform<C::Api> + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            PlatformAdapter::CompoundFork(adapter) => adapter,
            PlatformAdapter::Aave(adapter) => adapter,
            PlatformAdapter::Venus(adapter) => adapter,
        }
    }
}

/// Converts an annual figure out of a per second rate.
pub(crate) fn per_year<M: ManagedTypeApi>(per_second: &BigUint<M>) -> BigUint<M> {
    per_second * &BigUint::from(common_constants::SECONDS_PER_YEAR)
}
