//! The node trait and tick result.

/// Outcome of ticking a node. There is no in-progress variant; every
/// evaluation finishes within the tick that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

/// A tree node evaluated against a mutable context.
///
/// The context doubles as the blackboard: condition leaves read it,
/// action leaves write their decisions into it.
pub trait Behavior<C>: Send + Sync {
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed nodes tick through to their contents, so trees can hold
/// heterogeneous children behind `Box<dyn Behavior<C>>`.
impl<'t, C> Behavior<C> for Box<dyn Behavior<C> + 't> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
