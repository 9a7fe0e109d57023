//! Single-child result decorators.

use crate::{Behavior, Status};

/// Logical NOT over the child's status.
pub struct Inverter<'t, C> {
    child: Box<dyn Behavior<C> + 't>,
}

impl<'t, C> Inverter<'t, C> {
    pub fn new(child: Box<dyn Behavior<C> + 't>) -> Self {
        Self { child }
    }
}

impl<'t, C> Behavior<C> for Inverter<'t, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Runs the child for its side effects and reports Success regardless,
/// so optional steps never sink an enclosing sequence.
pub struct AlwaysSucceed<'t, C> {
    child: Box<dyn Behavior<C> + 't>,
}

impl<'t, C> AlwaysSucceed<'t, C> {
    pub fn new(child: Box<dyn Behavior<C> + 't>) -> Self {
        Self { child }
    }
}

impl<'t, C> Behavior<C> for AlwaysSucceed<'t, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let _ = self.child.tick(ctx);
        Status::Success
    }
}
