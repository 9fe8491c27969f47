use common_errors::*;
use common_structs::{has_repeated_tokens, PathStep};

use crate::storage;

multiversx_sc::imports!();

/// Exact output routes through the registered swap pools.
///
/// A path lists the token received from the first pool first and the token finally
/// owed last. Pool `i` sits between `path[i]` and `path[i + 1]` at the fee tier of
/// `path[i]`.
#[multiversx_sc::module]
pub trait PathModule: storage::Storage {
    /// Checks a route for a two token swap from `token_out` back to `token_owed`.
    ///
    /// For a same token position the route is `[token, fee], [counter_token, _]` and
    /// only identifies the pool lending `token`.
    ///
    /// # Errors
    /// - `ERROR_INVALID_PATH`: Fewer than two steps, a same token route with more, or a repeated token.
    /// - `ERROR_PATH_START_MISMATCH`: First token is not `token_out`.
    /// - `ERROR_PATH_END_MISMATCH`: Last token is not `token_owed`.
    fn validate_path(
        &self,
        path: &ManagedVec<PathStep<Self::Api>>,
        token_out: &EgldOrEsdtTokenIdentifier,
        token_owed: &EgldOrEsdtTokenIdentifier,
    ) {
        require!(path.len() >= 2, ERROR_INVALID_PATH);
        require!(&path.get(0).token == token_out, ERROR_PATH_START_MISMATCH);

        if token_out == token_owed {
            require!(path.len() == 2, ERROR_INVALID_PATH);
        } else {
            require!(
                &path.get(path.len() - 1).token == token_owed,
                ERROR_PATH_END_MISMATCH
            );
        }

        require!(!has_repeated_tokens(path), ERROR_INVALID_PATH);
    }

    /// Pool serving hop `hop` of the route.
    fn pool_for_hop(&self, path: &ManagedVec<PathStep<Self::Api>>, hop: usize) -> ManagedAddress {
        let step = path.get(hop);
        let next = path.get(hop + 1);
        let mapper = self.pool_address(&step.token, &next.token, step.fee);
        require!(!mapper.is_empty(), ERROR_POOL_NOT_REGISTERED);

        mapper.get()
    }
}
