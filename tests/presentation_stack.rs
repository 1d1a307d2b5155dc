mod common;

use common::{contents, present_all, sheets, DismissRecorder};
use sheetstack::presentation::{PresentationKind, Presenter};

use PresentationKind::{BottomSheet, Overlay, Sheet};

// -- Scenarios ----------------------------------------------------------------

#[test]
fn present_two_then_dismiss_top() {
    let presenter = Presenter::new();
    let recorder = DismissRecorder::new();

    present_all(&presenter, &recorder, &[(Sheet, "sheet")]);
    assert_eq!(presenter.len(), 1);
    assert_eq!(presenter.kind_at(0), Some(Sheet));

    present_all(&presenter, &recorder, &[(BottomSheet, "bottom")]);
    assert_eq!(presenter.len(), 2);
    assert_eq!(presenter.kind_at(1), Some(BottomSheet));

    presenter.dismiss(1);
    assert_eq!(presenter.len(), 1);
    assert_eq!(recorder.fired(), vec!["bottom"]);
    assert!(presenter.is_sheet(0));
}

#[test]
fn dismiss_all_fires_top_down() {
    let presenter = Presenter::new();
    let recorder = DismissRecorder::new();
    present_all(
        &presenter,
        &recorder,
        &[(Sheet, "a"), (BottomSheet, "b"), (Overlay, "c")],
    );

    presenter.dismiss(0);

    assert_eq!(recorder.fired(), vec!["c", "b", "a"]);
    assert_eq!(presenter.len(), 0);
}

#[test]
fn dismiss_on_empty_stack_is_noop() {
    let presenter: Presenter<&'static str> = Presenter::new();
    presenter.dismiss(5);
    assert!(presenter.is_empty());
    assert_eq!(presenter.revision(), 0);
}

#[test]
fn dismiss_out_of_range_keeps_stack() {
    let recorder = DismissRecorder::new();
    let presenter = sheets(2, &recorder);

    presenter.dismiss(10);

    assert_eq!(presenter.len(), 2);
    assert!(recorder.fired().is_empty());
}

#[test]
fn dismiss_route_without_callback() {
    let presenter = Presenter::new();
    presenter.present(Sheet, |_| "plain", None);

    presenter.dismiss(0);

    assert!(presenter.is_empty());
}

// -- Properties -----------------------------------------------------------------

#[test]
fn presents_land_in_call_order() {
    let presenter = Presenter::new();
    let recorder = DismissRecorder::new();
    let ids = present_all(
        &presenter,
        &recorder,
        &[(Overlay, "first"), (Sheet, "second"), (BottomSheet, "third"), (Sheet, "fourth")],
    );

    for (level, id) in ids.iter().enumerate() {
        assert_eq!(presenter.route_at(level).map(|route| route.id()), Some(*id));
    }
    assert_eq!(contents(&presenter), vec!["first", "second", "third", "fourth"]);
    assert_eq!(presenter.top_level(), Some(3));
}

#[test]
fn dismiss_leaves_exactly_level_routes() {
    for len in 1..=6 {
        for level in 0..len {
            let recorder = DismissRecorder::new();
            let presenter = sheets(len, &recorder);
            let below: Vec<_> = (0..level)
                .map(|l| presenter.route_at(l).map(|route| route.id()))
                .collect();

            presenter.dismiss(level);

            assert_eq!(presenter.len(), level, "len={len} level={level}");
            let after: Vec<_> = (0..level)
                .map(|l| presenter.route_at(l).map(|route| route.id()))
                .collect();
            assert_eq!(after, below);
            assert_eq!(recorder.fired().len(), len - level);
        }
    }
}

#[test]
fn out_of_range_dismiss_fires_nothing() {
    let recorder = DismissRecorder::new();
    let presenter = sheets(3, &recorder);
    let before = presenter.snapshot();

    for level in [3, 4, usize::MAX] {
        presenter.dismiss(level);
    }

    assert_eq!(*presenter.snapshot(), *before);
    assert!(recorder.fired().is_empty());
}

#[test]
fn partial_cascade_fires_from_top_to_level() {
    let recorder = DismissRecorder::new();
    let presenter = sheets(6, &recorder);

    presenter.dismiss(2);

    assert_eq!(recorder.fired(), vec!["s5", "s4", "s3", "s2"]);
    assert_eq!(contents(&presenter), vec!["s0", "s1"]);
}

#[test]
fn dismiss_all_empties_any_stack() {
    for len in 1..=5 {
        let recorder = DismissRecorder::new();
        let presenter = sheets(len, &recorder);

        presenter.dismiss_all();

        assert!(presenter.is_empty());
        let expected: Vec<_> = ["s0", "s1", "s2", "s3", "s4"][..len]
            .iter()
            .rev()
            .copied()
            .collect();
        assert_eq!(recorder.fired(), expected);
    }
}

#[test]
fn repeated_dismiss_has_no_extra_effect() {
    let recorder = DismissRecorder::new();
    let presenter = sheets(4, &recorder);

    presenter.dismiss(1);
    let after_first = presenter.snapshot();
    let fired_first = recorder.fired();

    presenter.dismiss(1);
    presenter.dismiss(3);

    assert_eq!(*presenter.snapshot(), *after_first);
    assert_eq!(recorder.fired(), fired_first);
}

#[test]
fn route_at_is_bounded() {
    let recorder = DismissRecorder::new();
    let presenter = sheets(2, &recorder);

    assert!(presenter.route_at(0).is_some());
    assert!(presenter.route_at(1).is_some());
    assert!(presenter.route_at(2).is_none());
    assert!(presenter.route_at(usize::MAX).is_none());
    assert!(!presenter.is_sheet(2));
    assert!(!presenter.is_bottom_sheet(2));
    assert!(!presenter.is_overlay(2));
}

#[test]
fn kinds_never_change_after_present() {
    let presenter = Presenter::new();
    let recorder = DismissRecorder::new();
    present_all(
        &presenter,
        &recorder,
        &[(Overlay, "o"), (BottomSheet, "b"), (Sheet, "s")],
    );
    presenter.dismiss(2);
    present_all(&presenter, &recorder, &[(Overlay, "o2")]);

    assert_eq!(presenter.snapshot().kinds(), vec![Overlay, BottomSheet, Overlay]);
}

#[test]
fn snapshot_is_unaffected_by_later_mutation() {
    let recorder = DismissRecorder::new();
    let presenter = sheets(3, &recorder);
    let held = presenter.snapshot();

    presenter.dismiss(0);

    assert_eq!(held.len(), 3);
    assert!(presenter.is_empty());
}
