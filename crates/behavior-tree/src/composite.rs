//! Flow-control nodes over multiple children.

use crate::{Behavior, Status};

/// A child paired with the function that scores its desirability.
type ScoredOption<'t, C> = (
    Box<dyn Behavior<C> + 't>,
    Box<dyn Fn(&C) -> i64 + Send + Sync + 't>,
);

/// Ticks children left to right; fails on the first failing child,
/// succeeds when all succeed. Short-circuited AND.
///
/// Nodes borrow `'t`: children may close over caller data, so a tree can
/// be built fresh over a context that itself borrows the world.
pub struct Sequence<'t, C> {
    children: Vec<Box<dyn Behavior<C> + 't>>,
}

impl<'t, C> Sequence<'t, C> {
    /// # Panics
    ///
    /// Panics on an empty child list; that is a tree construction bug.
    pub fn new(children: Vec<Box<dyn Behavior<C> + 't>>) -> Self {
        assert!(!children.is_empty(), "Sequence must have at least one child");
        Self { children }
    }
}

impl<'t, C> Behavior<C> for Sequence<'t, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Ticks children left to right; succeeds on the first succeeding child,
/// fails when all fail. Short-circuited OR.
pub struct Selector<'t, C> {
    children: Vec<Box<dyn Behavior<C> + 't>>,
}

impl<'t, C> Selector<'t, C> {
    /// # Panics
    ///
    /// Panics on an empty child list; that is a tree construction bug.
    pub fn new(children: Vec<Box<dyn Behavior<C> + 't>>) -> Self {
        assert!(!children.is_empty(), "Selector must have at least one child");
        Self { children }
    }
}

impl<'t, C> Behavior<C> for Selector<'t, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

/// Scores every option against the current context and ticks only the
/// best one.
///
/// Scoring runs before any child executes, over an immutable context, so
/// the choice is a pure function of the state at tick time. Ties break
/// toward the first maximal option in declaration order, which keeps the
/// node deterministic. Options scoring `i64::MIN` are unusable; when all
/// options are unusable the node fails without ticking anything.
pub struct UtilitySelector<'t, C> {
    options: Vec<ScoredOption<'t, C>>,
}

impl<'t, C> UtilitySelector<'t, C> {
    /// # Panics
    ///
    /// Panics on an empty option list; that is a tree construction bug.
    pub fn new(options: Vec<ScoredOption<'t, C>>) -> Self {
        assert!(
            !options.is_empty(),
            "UtilitySelector must have at least one option"
        );
        Self { options }
    }
}

impl<'t, C> Behavior<C> for UtilitySelector<'t, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let mut best: Option<(usize, i64)> = None;
        for (i, (_, scorer)) in self.options.iter().enumerate() {
            let score = scorer(ctx);
            if score == i64::MIN {
                continue;
            }
            // Strict greater-than keeps the first maximal option on ties.
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((i, score));
            }
        }
        match best {
            Some((i, _)) => self.options[i].0.tick(ctx),
            None => Status::Failure,
        }
    }
}
