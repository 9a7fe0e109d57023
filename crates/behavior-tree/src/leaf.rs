//! Closure leaves.
//!
//! Most trees bottom out in plain functions over the context. These two
//! adapters wrap them so call sites stay free of one-off node structs.

use crate::{Behavior, Status};

/// A read-only predicate leaf: Success when the predicate holds.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        if (self.predicate)(ctx) {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// A mutating leaf: runs the closure and reports its status.
pub struct Act<F> {
    act: F,
}

impl<F> Act<F> {
    pub fn new(act: F) -> Self {
        Self { act }
    }
}

impl<C, F> Behavior<C> for Act<F>
where
    F: Fn(&mut C) -> Status + Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        (self.act)(ctx)
    }
}
