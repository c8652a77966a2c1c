/// Accounts and the keyed store holding their balances.
/// Pure data access, no business rules live here.
pub mod account;

/// Immutable transaction records and the append-only log of committed
/// operations.
pub mod transaction;

/// The ledger service interface plus its in memory implementation.
/// All validation and atomicity rules are enforced here.
pub mod ledger;

/// Cloneable, thread-safe handle over the in memory ledger.
pub mod shared;

/// Wire-shaped operation requests, validated into [`request::Operation`]
/// before they reach the ledger.
pub mod request;

/// Batch driver feeding CSV operation scripts through a seeded ledger.
/// Lives in the library (rather than the binary) so the integration
/// tests can run it end to end.
pub mod runner;
