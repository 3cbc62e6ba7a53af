/// Stack left unused before more is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first moving to a fresh stack segment if the current one is
/// nearly exhausted.
///
/// Deeply nested source text and deep user recursion both turn into deep
/// native recursion in the parser and evaluator. Wrapping their recursive
/// entry points in this function keeps them off the guard page even on
/// threads with small stacks.
pub(crate) fn ensure_sufficient_stack<R, F: FnOnce() -> R>(f: F) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
