//! Span timing for tests.
//!
//! [`init_tracing`] installs a subscriber whose only layer records how long
//! each named span stayed open, grouped by the current [`TimingScope`].  The
//! totals are thread-local, so concurrently running tests do not mix.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    sync::Once,
    time::{Duration, Instant},
};

use tracing_subscriber::{
    Layer, Registry,
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

thread_local! {
    #[allow(clippy::type_complexity)]
    static TIMING_SCOPES: RefCell<HashMap<TimingScope, BTreeMap<&'static str, (Duration, usize)>>> =
        RefCell::new(HashMap::new());
    static TIMING_SCOPE: RefCell<TimingScope> = const { RefCell::new(TimingScope::Test) };
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TimingScope {
    Test,
    Consistency,
}

pub struct TimingScopeGuard {
    previous: TimingScope,
}

impl Drop for TimingScopeGuard {
    fn drop(&mut self) {
        TIMING_SCOPE.with(|scope| {
            *scope.borrow_mut() = self.previous;
        });
    }
}

/// Attributes spans closed until the guard is dropped to `scope`.
pub fn set_timing_scope(scope: TimingScope) -> TimingScopeGuard {
    let previous = TIMING_SCOPE.with(|current| current.replace(scope));
    TimingScopeGuard { previous }
}

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        _attrs: &tracing::span::Attributes<'_>,
        id: &tracing::Id,
        ctx: Context<'_, S>,
    ) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let name = span.metadata().name();
        if let Some(start) = span.extensions().get::<Instant>() {
            let elapsed = start.elapsed();
            let scope = TIMING_SCOPE.with(|scope| *scope.borrow());
            TIMING_SCOPES.with(|totals| {
                let mut totals = totals.borrow_mut();
                let entry = totals
                    .entry(scope)
                    .or_default()
                    .entry(name)
                    .or_insert((Duration::ZERO, 0));
                entry.0 += elapsed;
                entry.1 += 1;
            });
        }
    }
}

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = Registry::default().with(TimingLayer).try_init();
    });
}

/// Returns the total time and count recorded for spans named `name`.
pub fn span_timing(scope: TimingScope, name: &str) -> Option<(Duration, usize)> {
    TIMING_SCOPES.with(|totals| totals.borrow().get(&scope)?.get(name).copied())
}

pub fn dump_span_timings() {
    dump_scope_timings(TimingScope::Test);
    dump_scope_timings(TimingScope::Consistency);
}

pub fn reset_span_timings() {
    init_tracing();
    TIMING_SCOPES.with(|totals| totals.borrow_mut().clear());
}

fn dump_scope_timings(scope: TimingScope) {
    TIMING_SCOPES.with(|totals| {
        let totals = totals.borrow();
        eprintln!("{scope:?} timings (desc):");
        let Some(entries) = totals.get(&scope) else {
            return;
        };
        let mut entries: Vec<_> = entries.iter().collect();
        entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));
        for (name, (duration, count)) in entries {
            eprintln!("  {name}: {duration:?} ({count}x)");
        }
    });
}
