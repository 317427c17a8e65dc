//! End-to-end chart scenarios: selection, scaling, empty state, click-to-select
//! and failure on incomplete trials.

use serde_json::json;
use trialviz::chart::{render_chart, ChartInput, ChartSurface, ChartView};
use trialviz::config::ChartConfig;
use trialviz::interaction::{Callbacks, ChartMessage, HoverEvent, PointerEvent, SelectEvent};
use trialviz::scale::build_scale;
use trialviz::select::select_visible;
use trialviz::trial::{ActiveTrial, Axis, AxisSelection, Trial, TrialStatus};
use trialviz::ChartError;

fn duration() -> AxisSelection {
    AxisSelection::single(Axis::metric("duration"))
}

fn search_trials() -> Vec<Trial> {
    vec![
        Trial::completed("t0").with_value("duration", 4.0),
        Trial::completed("t1").with_value("duration", 8.0),
        Trial::completed("t2").with_value("duration", 6.0).with_label("best", json!({})),
        Trial::new("t3", TrialStatus::Running),
    ]
}

#[test]
fn test_scale_maps_zero_based_domain() {
    let trials = vec![
        Trial::completed("a").with_value("duration", 5.0),
        Trial::completed("b").with_value("duration", 10.0),
    ];
    let selection = select_visible(&trials, &[]);
    let scale = build_scale("duration", &selection.completed, (0.0, 100.0)).unwrap();
    assert_eq!(scale.map(10.0), 100.0);
    assert_eq!(scale.map(5.0), 50.0);
    assert_eq!(scale.map(0.0), 0.0);
}

#[test]
fn test_label_filter_keeps_only_labelled_trial() {
    let trials = search_trials();
    let filter = vec!["best".to_string()];
    let selection = select_visible(&trials, &filter);
    let indices: Vec<usize> = selection.visible.iter().map(|t| t.index).collect();
    assert_eq!(indices, vec![2]);
    assert_eq!(selection.completed.len(), 3);
}

#[test]
fn test_no_completed_trials_renders_empty_state() {
    let trials = vec![Trial::new("p", TrialStatus::Pending), Trial::new("f", TrialStatus::Failed)];
    let selection = select_visible(&trials, &[]);
    let err = build_scale("duration", &selection.completed, (0.0, 100.0)).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDomain { .. }));

    let axes = duration();
    let view = render_chart(&ChartInput::new(&trials, &axes), &ChartConfig::default()).unwrap();
    assert!(matches!(view, ChartView::Empty(_)));
    assert!(view.to_svg(None).contains("<svg"));
}

#[test]
fn test_click_selects_once_and_rerender_marks_active() {
    let trials = search_trials();
    let axes = duration();
    let config = ChartConfig::default();

    let selected = std::rc::Rc::new(std::cell::RefCell::new(Vec::<SelectEvent>::new()));
    let sink = std::rc::Rc::clone(&selected);
    let mut callbacks = Callbacks::new(
        Box::new(|_: HoverEvent| {}),
        Box::new(move |event: SelectEvent| sink.borrow_mut().push(event)),
    );

    let mut surface = ChartSurface::new();
    surface.render(&ChartInput::new(&trials, &axes), &config, &mut callbacks).unwrap();
    let mut click = PointerEvent::click(surface.target(2));
    assert!(surface.dispatch(&mut click, &mut callbacks));
    assert!(click.is_propagation_stopped());

    let events = selected.borrow().clone();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].index, 2);
    assert_eq!(events[0].trial, trials[2]);

    // host applies the request and renders again
    let input = ChartInput::new(&trials, &axes).active(Some(ActiveTrial::new(events[0].index)));
    let view = surface.render(&input, &config, &mut callbacks).unwrap();
    let scene = view.scene().unwrap();
    for point in &scene.points {
        let expected = if point.index() == 2 { 6.0 } else { 3.0 };
        assert_eq!(point.radius, expected);
    }
}

#[test]
fn test_host_hover_cleared_after_click_and_leave() {
    let trials = search_trials();
    let axes = duration();
    let hovered = std::rc::Rc::new(std::cell::Cell::new(None));
    let sink = std::rc::Rc::clone(&hovered);
    let mut callbacks = Callbacks::new(
        Box::new(move |event: HoverEvent| sink.set(event.index)),
        Box::new(|_: SelectEvent| {}),
    );

    let mut surface = ChartSurface::new();
    surface.render(&ChartInput::new(&trials, &axes), &ChartConfig::default(), &mut callbacks).unwrap();
    surface.dispatch(&mut PointerEvent::enter(surface.target(1)), &mut callbacks);
    surface.dispatch(&mut PointerEvent::click(surface.target(1)), &mut callbacks);
    assert_eq!(hovered.get(), Some(1));

    surface.dispatch(&mut PointerEvent::leave(surface.target(1)), &mut callbacks);
    assert_eq!(hovered.get(), None);
    assert!(surface.popup().is_some_and(|p| !p.visible));
}

#[test]
fn test_missing_value_renders_nothing() {
    let mut trials = search_trials();
    trials.push(Trial::completed("t4").with_value("loss", 0.3));
    let axes = duration();

    let mut surface = ChartSurface::new();
    let mut messages: Vec<ChartMessage> = Vec::new();
    let err = surface
        .render(&ChartInput::new(&trials, &axes), &ChartConfig::default(), &mut messages)
        .unwrap_err();
    assert!(matches!(err, ChartError::MissingAxisValue { index: 4, .. }));
    assert!(surface.view().is_none());
}

#[test]
fn test_hover_sequence_never_selects() {
    let trials = search_trials();
    let axes = duration();
    let mut surface = ChartSurface::new();
    let mut messages: Vec<ChartMessage> = Vec::new();
    surface.render(&ChartInput::new(&trials, &axes), &ChartConfig::default(), &mut messages).unwrap();

    for index in [0, 1, 2, 1, 0] {
        surface.dispatch(&mut PointerEvent::enter(surface.target(index)), &mut messages);
        surface.dispatch(&mut PointerEvent::leave(surface.target(index)), &mut messages);
    }

    assert_eq!(messages.len(), 10);
    assert!(messages.iter().all(|m| matches!(m, ChartMessage::Hover(_))));
}

#[test]
fn test_events_from_previous_render_are_dropped() {
    let trials = search_trials();
    let axes = duration();
    let mut surface = ChartSurface::new();
    let mut messages: Vec<ChartMessage> = Vec::new();

    surface.render(&ChartInput::new(&trials, &axes), &ChartConfig::default(), &mut messages).unwrap();
    let stale = surface.target(1);
    let fewer = &trials[..2];
    surface.render(&ChartInput::new(fewer, &axes), &ChartConfig::default(), &mut messages).unwrap();

    assert!(!surface.dispatch(&mut PointerEvent::click(stale), &mut messages));
    assert!(messages.is_empty());
}

#[test]
fn test_three_axis_chart_renders_all_points() {
    let trials: Vec<Trial> = (0..5)
        .map(|i| {
            Trial::completed(format!("t{i}"))
                .with_value("duration", f64::from(i) + 1.0)
                .with_value("lr", 0.01 * f64::from(i + 1))
                .with_value("depth", f64::from(10 - i))
        })
        .collect();
    let axes = AxisSelection::new(vec![
        Axis::metric("duration"),
        Axis::parameter("lr"),
        Axis::parameter("depth"),
    ])
    .unwrap();
    let config = ChartConfig::for_dimensions(axes.dimensions());
    let view = render_chart(&ChartInput::new(&trials, &axes), &config).unwrap();
    let scene = view.scene().unwrap();
    assert_eq!(scene.points.len(), 5);
    assert_eq!(scene.axis_formats.len(), 3);
    assert!(view.to_svg(Some(0)).contains("axis-depth"));
}
