//! Carrying a cost alongside an operation's result.

use crate::OperationCost;

/// An operation's return value paired with the hashing work it performed.
#[must_use]
#[derive(Debug, Eq, PartialEq)]
pub struct CostContext<T> {
    /// Wrapped operation's return value.
    pub value: T,
    /// Cost of the operation.
    pub cost: OperationCost,
}

impl<T> CostContext<T> {
    /// Take the value out, folding its cost into `acc_cost`.
    pub fn unwrap_add_cost(self, acc_cost: &mut OperationCost) -> T {
        *acc_cost += self.cost;
        self.value
    }

    /// Take the value out, discarding the cost.
    pub fn unwrap(self) -> T {
        self.value
    }
}

/// `Result` wrapped into a `CostContext`.
pub type CostResult<T, E> = CostContext<Result<T, E>>;

/// Wrap any value into a `CostContext`.
pub trait CostsExt {
    /// Attach `cost` to `self`.
    fn wrap_with_cost(self, cost: OperationCost) -> CostContext<Self>
    where
        Self: Sized,
    {
        CostContext { value: self, cost }
    }
}

impl<T> CostsExt for T {}

/// Unwraps a `CostResult`, adding its cost to `$cost`. On `Err` the enclosing
/// function returns the error together with everything counted so far.
#[macro_export]
macro_rules! cost_return_on_error {
    ( &mut $cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result_with_cost = { $($body)+ };
            match result_with_cost.unwrap_add_cost(&mut $cost) {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}

/// Unwraps a plain `Result`. On `Err` the enclosing function returns the
/// error with `$cost` as it stands.
#[macro_export]
macro_rules! cost_return_on_error_no_add {
    ( $cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result = { $($body)+ };
            match result {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_cost(n: u32) -> OperationCost {
        OperationCost::with_hash_leaf_calls(n)
    }

    #[test]
    fn test_unwrap_add_cost_accumulates() {
        let mut acc = OperationCost::with_hash_node_calls(1);
        let value = "node".wrap_with_cost(leaf_cost(2)).unwrap_add_cost(&mut acc);
        assert_eq!(value, "node");
        assert_eq!(
            acc,
            OperationCost {
                hash_leaf_calls: 2,
                hash_node_calls: 1,
            }
        );
    }

    fn counted_ok(n: u32) -> CostResult<u32, String> {
        Ok(n).wrap_with_cost(leaf_cost(n))
    }

    fn counted_err(n: u32) -> CostResult<u32, String> {
        Err(format!("failed after {n}")).wrap_with_cost(leaf_cost(n))
    }

    fn chain(fail_second: bool) -> CostResult<u32, String> {
        let mut cost = OperationCost::default();
        let a = cost_return_on_error!(&mut cost, counted_ok(2));
        let b = if fail_second {
            cost_return_on_error!(&mut cost, counted_err(5))
        } else {
            cost_return_on_error!(&mut cost, counted_ok(5))
        };
        Ok(a + b).wrap_with_cost(cost)
    }

    #[test]
    fn test_cost_return_on_error_success_path() {
        let result = chain(false);
        assert_eq!(result.cost, leaf_cost(7));
        assert_eq!(result.value, Ok(7));
    }

    #[test]
    fn test_cost_return_on_error_keeps_cost_on_failure() {
        let result = chain(true);
        assert_eq!(result.cost, leaf_cost(7));
        assert_eq!(result.value, Err("failed after 5".to_string()));
    }

    #[test]
    fn test_cost_return_on_error_no_add() {
        fn check(input: Result<u8, &'static str>) -> CostResult<u8, &'static str> {
            let cost = leaf_cost(1);
            let value = cost_return_on_error_no_add!(cost, input);
            Ok(value + 1).wrap_with_cost(cost)
        }
        assert_eq!(check(Ok(1)), Ok(2).wrap_with_cost(leaf_cost(1)));
        assert_eq!(check(Err("bad")), Err("bad").wrap_with_cost(leaf_cost(1)));
    }
}
