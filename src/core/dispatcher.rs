//! Invocation dispatcher
//!
//! Routes `(function, args)` invocations to the ledger state machine. The
//! function name is parsed once into the [`Operation`] enum and routed from
//! there; unknown names fail with `UnknownOperation` on both the invoke and
//! the query path.
//!
//! The dispatcher owns the ledger behind a mutex and holds the lock for the
//! whole read-validate-write of each invocation. The reference model is one
//! invocation at a time; the lock makes that hold when the dispatcher is
//! shared across threads, so two concurrent transfers touching the same
//! accounts cannot interleave and lose updates.

use crate::core::ledger::LedgerStateMachine;
use crate::store::KeyValueStore;
use crate::types::{Balance, LedgerError, Operation};
use parking_lot::Mutex;

/// Invocation surface over a [`LedgerStateMachine`]
///
/// Mirrors the host split between mutating invocations (`invoke`) and
/// read-only queries (`query`). Errors are returned to the caller and are
/// never fatal: the dispatcher keeps serving subsequent invocations.
pub struct Dispatcher<S: KeyValueStore> {
    ledger: Mutex<LedgerStateMachine<S>>,
}

impl<S: KeyValueStore> Dispatcher<S> {
    /// Create a dispatcher over the given store
    pub fn new(store: S) -> Self {
        Dispatcher {
            ledger: Mutex::new(LedgerStateMachine::new(store)),
        }
    }

    /// Execute a mutating invocation
    ///
    /// Accepts `init`, `transfer`, `earn` and `set`. Mutations return no
    /// payload. Routing a query name here fails with `UnknownOperation`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function name is unknown, the arguments fail
    /// validation, or the operation itself fails; see [`LedgerError`].
    pub fn invoke(&self, function: &str, args: &[String]) -> Result<(), LedgerError> {
        let operation: Operation = function.parse()?;
        if !operation.is_mutation() {
            return Err(LedgerError::unknown_operation(function));
        }

        tracing::info!(%operation, args = args.len(), "invoke");

        let mut ledger = self.ledger.lock();
        match operation {
            Operation::Init => {
                // At least two names; extras are ignored
                if args.len() < 2 {
                    return Err(LedgerError::wrong_argument_count(
                        operation.name(),
                        2,
                        args.len(),
                    ));
                }
                ledger.init(&args[0], &args[1])
            }
            Operation::Transfer => {
                require_arity(operation, args, 3)?;
                let amount = parse_amount(operation, &args[2])?;
                ledger.transfer(&args[0], &args[1], amount)
            }
            Operation::Earn => {
                require_arity(operation, args, 2)?;
                let amount = parse_amount(operation, &args[1])?;
                ledger.earn(&args[0], amount)
            }
            Operation::Set => {
                require_arity(operation, args, 2)?;
                let amount = parse_amount(operation, &args[1])?;
                ledger.set(&args[0], amount)
            }
            Operation::Balance => unreachable!("balance is not a mutation"),
        }
    }

    /// Execute a read-only query
    ///
    /// Accepts `balance`, returning the raw stored balance bytes. Routing a
    /// mutation name here fails with `UnknownOperation`.
    pub fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>, LedgerError> {
        let operation: Operation = function.parse()?;
        if operation.is_mutation() {
            return Err(LedgerError::unknown_operation(function));
        }

        tracing::info!(%operation, args = args.len(), "query");

        require_arity(operation, args, 1)?;
        self.ledger.lock().get_balance(&args[0])
    }

    /// Consume the dispatcher, returning the store
    pub fn into_store(self) -> S {
        self.ledger.into_inner().into_store()
    }
}

/// Check exact arity before any store access
fn require_arity(operation: Operation, args: &[String], expected: usize) -> Result<(), LedgerError> {
    if args.len() != expected {
        return Err(LedgerError::wrong_argument_count(
            operation.name(),
            expected,
            args.len(),
        ));
    }
    Ok(())
}

/// Parse an amount argument from decimal text
fn parse_amount(operation: Operation, text: &str) -> Result<Balance, LedgerError> {
    text.parse::<Balance>()
        .map_err(|_| LedgerError::invalid_amount(operation.name(), text))
}
