/// Registered customers, looked up by normalized national id.
pub mod user;

/// Accounts opened for registered users.
pub mod account;

/// The single running balance, withdrawal counter and statement log.
/// State is modified using events, which are created by validating an amount
/// against the current state.
pub mod ledger;

/// Menu codes and amount parsing for the console.
pub mod command;

/// Branch code and withdrawal limits.
pub mod config;

/// Bank processor interface, plus "in memory" implementation.
/// Owns every piece of state for the duration of the run and assigns account numbers.
pub mod processor;

/// Console loop over any reader/writer pair. Lives in the library so the
/// integration tests can run scripted sessions against it.
pub mod bin_utils;
