//! Symbolic output recipient.

use core::fmt;

use super::AccountId;

/// Where the output of a swap should be delivered.
///
/// The symbolic variants exist because a caller authors a request before
/// knowing which concrete account will hold intermediate funds: mid-chain
/// hops deliver to the router's own custody, and "the caller" is only known
/// at execution time.  Resolution happens at the point of first use inside
/// the executing driver, never earlier.
///
/// # Examples
///
/// ```
/// use meander::domain::{AccountId, Recipient};
///
/// let caller = AccountId::from_bytes([7u8; 20]);
/// let router = AccountId::from_bytes([8u8; 20]);
/// assert_eq!(Recipient::Caller.resolve(caller, router), caller);
/// assert_eq!(Recipient::Router.resolve(caller, router), router);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipient {
    /// Deliver to the account that initiated the top-level call.
    Caller,
    /// Deliver to the router's own custody.
    Router,
    /// Deliver to an explicit account.
    Account(AccountId),
}

impl Recipient {
    /// Resolves the symbolic recipient against the executing call's
    /// concrete identities.
    #[must_use]
    pub const fn resolve(&self, caller: AccountId, router: AccountId) -> AccountId {
        match self {
            Self::Caller => caller,
            Self::Router => router,
            Self::Account(account) => *account,
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caller => write!(f, "caller"),
            Self::Router => write!(f, "router"),
            Self::Account(account) => write!(f, "{account}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 20])
    }

    #[test]
    fn caller_resolves_to_caller() {
        assert_eq!(Recipient::Caller.resolve(account(1), account(2)), account(1));
    }

    #[test]
    fn router_resolves_to_router() {
        assert_eq!(Recipient::Router.resolve(account(1), account(2)), account(2));
    }

    #[test]
    fn explicit_account_resolves_to_itself() {
        assert_eq!(
            Recipient::Account(account(9)).resolve(account(1), account(2)),
            account(9)
        );
    }

    #[test]
    fn display_symbolic_variants() {
        assert_eq!(format!("{}", Recipient::Caller), "caller");
        assert_eq!(format!("{}", Recipient::Router), "router");
    }
}
