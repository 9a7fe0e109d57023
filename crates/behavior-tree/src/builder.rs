//! Boxing shorthands for tree construction.
//!
//! Trees read better as nested calls than as nested `Box::new(..)`.
//! Every helper is generic over a tree lifetime `'t`, so leaves may
//! borrow from the caller and trees can be built over short-lived
//! contexts instead of owning everything they touch.

use crate::{Act, AlwaysSucceed, Behavior, Condition, Inverter, Selector, Sequence, Status};

#[inline]
pub fn sequence<'t, C: 't>(children: Vec<Box<dyn Behavior<C> + 't>>) -> Box<dyn Behavior<C> + 't> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<'t, C: 't>(children: Vec<Box<dyn Behavior<C> + 't>>) -> Box<dyn Behavior<C> + 't> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn inverter<'t, C: 't>(child: Box<dyn Behavior<C> + 't>) -> Box<dyn Behavior<C> + 't> {
    Box::new(Inverter::new(child))
}

#[inline]
pub fn always_succeed<'t, C: 't>(child: Box<dyn Behavior<C> + 't>) -> Box<dyn Behavior<C> + 't> {
    Box::new(AlwaysSucceed::new(child))
}

#[inline]
pub fn condition<'t, C: 't, F>(predicate: F) -> Box<dyn Behavior<C> + 't>
where
    F: Fn(&C) -> bool + Send + Sync + 't,
{
    Box::new(Condition::new(predicate))
}

#[inline]
pub fn act<'t, C: 't, F>(f: F) -> Box<dyn Behavior<C> + 't>
where
    F: Fn(&mut C) -> Status + Send + Sync + 't,
{
    Box::new(Act::new(f))
}
