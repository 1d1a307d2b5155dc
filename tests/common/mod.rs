//! Shared test helpers for presentation stack tests.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;

use sheetstack::presentation::{OnDismiss, PresentationKind, Presenter, RouteId};

/// Records the order in which dismiss callbacks fire.
#[derive(Clone, Default)]
pub struct DismissRecorder {
    fired: Arc<Mutex<Vec<&'static str>>>,
}

impl DismissRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback that records `name` when it runs.
    pub fn hook(&self, name: &'static str) -> Option<OnDismiss> {
        let fired = Arc::clone(&self.fired);
        Some(Box::new(move || fired.lock().push(name)))
    }

    pub fn fired(&self) -> Vec<&'static str> {
        self.fired.lock().clone()
    }
}

/// Present one route per `(kind, name)`; content is the name.
pub fn present_all(
    presenter: &Presenter<&'static str>,
    recorder: &DismissRecorder,
    routes: &[(PresentationKind, &'static str)],
) -> Vec<RouteId> {
    routes
        .iter()
        .map(|(kind, name)| {
            let content = *name;
            presenter.present(*kind, move |_| content, recorder.hook(content))
        })
        .collect()
}

/// Stack of `count` sheets named by level.
pub fn sheets(count: usize, recorder: &DismissRecorder) -> Presenter<&'static str> {
    const NAMES: [&str; 8] = ["s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7"];
    assert!(count <= NAMES.len());
    let presenter = Presenter::new();
    let routes: Vec<_> = NAMES[..count]
        .iter()
        .map(|name| (PresentationKind::Sheet, *name))
        .collect();
    present_all(&presenter, recorder, &routes);
    presenter
}

/// Content at each level, bottom-up.
pub fn contents(presenter: &Presenter<&'static str>) -> Vec<&'static str> {
    let snapshot = presenter.snapshot();
    (0..snapshot.len())
        .filter_map(|level| presenter.binding_for(level).zip(snapshot.route_at(level)))
        .map(|(binding, route)| route.render(binding))
        .collect()
}
