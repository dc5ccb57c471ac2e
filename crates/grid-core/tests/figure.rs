// File: crates/grid-core/tests/figure.rs
// Purpose: Decoration pipeline over a recorded grid: labels, limits, tick clean-up, plot hook.

use std::cell::Cell;
use std::rc::Rc;

use grid_core::error::Axis;
use grid_core::{
    decorate, Canvas, ConfigurationError, FigureOptions, Grid, GridFigure, GridSpec, HAlign, LayoutParams, Margins,
    Panel, RecordedPanel, RecordingCanvas, Scale, TickDirection, VAlign,
};

fn scale(label: &str, ticks: &[f64]) -> Scale {
    Scale::new(label, ticks.to_vec()).expect("valid scale")
}

fn x_scales() -> Vec<Scale> {
    vec![scale("a", &[0.0, 1.0, 2.0]), scale("b", &[0.0, 2.0, 4.0])]
}

fn y_scales() -> Vec<Scale> {
    vec![scale("c", &[-1.0, 0.0, 1.0]), scale("d", &[-2.0, 0.0, 2.0]), scale("e", &[-3.0, 0.0, 3.0])]
}

fn options(titles: &[&str]) -> FigureOptions {
    FigureOptions {
        layout: LayoutParams {
            width: 160.0,
            height: 120.0,
            dpi: 100.0,
            margins: Margins::new(15.0, 5.0, 20.0, 15.0),
            horizontal_gap: 2.0,
            vertical_gap: 2.0,
        },
        column_titles: titles.iter().map(|t| t.to_string()).collect(),
    }
}

fn build(titles: &[&str]) -> GridFigure<RecordingCanvas> {
    GridFigure::new(RecordingCanvas::new(), x_scales(), y_scales(), options(titles)).expect("valid figure")
}

#[test]
fn example_three_by_two() {
    let fig = build(&["left", "right"]);
    let grid = fig.grid();
    assert_eq!(grid.shape(), (3, 2));

    let top_left = &grid[(0, 0)];
    assert_eq!(top_left.title.as_deref(), Some("left"));
    assert_eq!(top_left.xlim, Some((0.0, 2.0)));
    assert_eq!(top_left.ylim, Some((-1.0, 1.0)));

    let bottom_right = &grid[(2, 1)];
    assert!(bottom_right.has_xtick_text());
    assert!(!bottom_right.has_ytick_text());
    assert_eq!(bottom_right.xlabel.as_deref(), Some("b"));
    assert_eq!(bottom_right.xlim, Some((0.0, 4.0)));
    assert_eq!(bottom_right.ylim, Some((-3.0, 3.0)));

    let top_right = &grid[(0, 1)];
    assert!(!top_right.has_xtick_text());
    assert!(!top_right.has_ytick_text());
    assert_eq!(top_right.ylabel, None);
    // tick marks stay even though the text is gone
    assert_eq!(top_right.xticks, vec![0.0, 2.0, 4.0]);
}

#[test]
fn canvas_receives_the_computed_fractions() {
    let fig = build(&[]);
    let spec = fig.canvas().last_spec.expect("grid requested");
    assert_eq!((spec.nrows, spec.ncols), (3, 2));
    assert_eq!(&spec.fractions, fig.fractions());
    assert_eq!(spec.dpi, 100.0);
    assert_eq!(fig.canvas().grids_created, 1);
}

#[test]
fn every_panel_is_bound_to_its_row_and_column() {
    let fig = build(&[]);
    for ((row, col), p) in fig.grid().iter() {
        let xs = &fig.x_scales()[col];
        let ys = &fig.y_scales()[row];
        assert_eq!(p.xlim, Some(xs.limits()), "panel ({row}, {col})");
        assert_eq!(p.ylim, Some(ys.limits()), "panel ({row}, {col})");
        assert_eq!(p.xticks, xs.ticks());
        assert_eq!(p.yticks, ys.ticks());
        assert_eq!(p.tick_direction, TickDirection::In);
    }
}

#[test]
fn tick_labels_only_on_outer_edges() {
    let fig = build(&[]);
    let last_row = fig.grid().nrows() - 1;
    for ((row, col), p) in fig.grid().iter() {
        assert_eq!(p.has_xtick_text(), row == last_row, "x labels at ({row}, {col})");
        assert_eq!(p.has_ytick_text(), col == 0, "y labels at ({row}, {col})");
    }

    let bottom_left = &fig.grid()[(last_row, 0)];
    let xtexts: Vec<&str> = bottom_left.xtick_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(xtexts, ["0", "1", "2"]);
    let ytexts: Vec<&str> = bottom_left.ytick_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(ytexts, ["-3", "0", "3"]);
}

#[test]
fn axis_labels_only_on_outer_edges() {
    let fig = build(&[]);
    for ((row, col), p) in fig.grid().iter() {
        if row == 2 {
            assert_eq!(p.xlabel.as_deref(), Some(["a", "b"][col]));
        } else {
            assert_eq!(p.xlabel, None);
        }
        if col == 0 {
            assert_eq!(p.ylabel.as_deref(), Some(["c", "d", "e"][row]));
        } else {
            assert_eq!(p.ylabel, None);
        }
    }
}

#[test]
fn extreme_labels_are_tucked_inside() {
    let fig = build(&[]);
    let p = &fig.grid()[(2, 1)];
    let aligns: Vec<HAlign> = p.xtick_labels.iter().map(|l| l.align).collect();
    assert_eq!(aligns, [HAlign::Left, HAlign::Center, HAlign::Right]);

    let p = &fig.grid()[(1, 0)];
    let aligns: Vec<VAlign> = p.ytick_labels.iter().map(|l| l.align).collect();
    assert_eq!(aligns, [VAlign::Bottom, VAlign::Center, VAlign::Top]);

    // interior panels keep default anchors
    let p = &fig.grid()[(0, 1)];
    assert!(p.xtick_labels.iter().all(|l| l.align == HAlign::Center));
    assert!(p.ytick_labels.iter().all(|l| l.align == VAlign::Center));
}

#[test]
fn partial_titles_only_touch_leading_columns() {
    let fig = build(&["only"]);
    assert_eq!(fig.grid()[(0, 0)].title.as_deref(), Some("only"));
    assert_eq!(fig.grid()[(0, 1)].title, None);
    assert!(fig.grid().iter().filter(|((row, _), _)| *row > 0).all(|(_, p)| p.title.is_none()));
}

#[test]
fn single_panel_keeps_all_labels() {
    let fig = GridFigure::new(
        RecordingCanvas::new(),
        vec![scale("x", &[0.0, 10.0])],
        vec![scale("y", &[5.0, 0.0])],
        FigureOptions::default(),
    )
    .unwrap();
    let p = &fig.grid()[(0, 0)];
    assert!(p.has_xtick_text() && p.has_ytick_text());
    assert_eq!(p.xlabel.as_deref(), Some("x"));
    assert_eq!(p.ylabel.as_deref(), Some("y"));
    assert_eq!(p.ylim, Some((5.0, 0.0)));
    assert_eq!(fig.fractions().wspace, 0.0);
    assert_eq!(fig.fractions().hspace, 0.0);
}

#[test]
fn plotter_runs_after_decoration() {
    let fig = GridFigure::with_plotter(RecordingCanvas::new(), x_scales(), y_scales(), options(&[]), |grid: &mut Grid<RecordedPanel>| {
        for ((row, _), p) in grid.iter_mut() {
            // limits are already bound when the hook runs
            assert!(p.xlim.is_some() && p.ylim.is_some());
            p.draw_line(&[0.0, 1.0], &[row as f64, row as f64]);
        }
    })
    .unwrap();
    assert!(fig.grid().iter().all(|((row, _), p)| p.lines == vec![vec![(0.0, row as f64), (1.0, row as f64)]]));
}

#[test]
fn no_plot_draws_nothing() {
    let fig = build(&[]);
    assert!(fig.grid().iter().all(|(_, p)| p.lines.is_empty()));
}

#[test]
fn decoration_is_deterministic_across_fresh_grids() {
    let a = build(&["l", "r"]);
    let b = build(&["l", "r"]);
    let pa: Vec<&RecordedPanel> = a.grid().iter().map(|(_, p)| p).collect();
    let pb: Vec<&RecordedPanel> = b.grid().iter().map(|(_, p)| p).collect();
    assert_eq!(pa, pb);

    // re-running the pipeline on an already decorated grid changes nothing
    let (_, mut grid) = a.into_parts();
    let before = grid.clone();
    let titles = vec!["l".to_string(), "r".to_string()];
    decorate(&mut grid, &x_scales(), &y_scales(), &titles).unwrap();
    let again: Vec<&RecordedPanel> = grid.iter().map(|(_, p)| p).collect();
    let first: Vec<&RecordedPanel> = before.iter().map(|(_, p)| p).collect();
    assert_eq!(again, first);
}

#[test]
fn empty_scales_fail_before_touching_the_canvas() {
    let err = GridFigure::new(RecordingCanvas::new(), Vec::new(), y_scales(), FigureOptions::default()).err();
    assert_eq!(err, Some(ConfigurationError::EmptyScales { axis: Axis::X }));
    let err = GridFigure::new(RecordingCanvas::new(), x_scales(), Vec::new(), FigureOptions::default()).err();
    assert_eq!(err, Some(ConfigurationError::EmptyScales { axis: Axis::Y }));
}

#[test]
fn too_many_titles_fail() {
    let err = GridFigure::new(RecordingCanvas::new(), x_scales(), y_scales(), options(&["a", "b", "c"])).err();
    assert_eq!(err, Some(ConfigurationError::TooManyTitles { given: 3, ncols: 2 }));
}

#[test]
fn layout_that_does_not_fit_fails() {
    let mut opts = options(&[]);
    opts.layout.margins = Margins::new(80.0, 80.0, 10.0, 10.0);
    let err = GridFigure::new(RecordingCanvas::new(), x_scales(), y_scales(), opts).err();
    assert!(matches!(err, Some(ConfigurationError::DoesNotFit { axis: Axis::X, .. })));
}

/// Counts `create_grid` calls through a handle the test keeps after the canvas is consumed.
struct CountingCanvas {
    inner: RecordingCanvas,
    calls: Rc<Cell<usize>>,
}

impl CountingCanvas {
    fn new() -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (Self { inner: RecordingCanvas::new(), calls: Rc::clone(&calls) }, calls)
    }
}

impl Canvas for CountingCanvas {
    type Panel = RecordedPanel;

    fn create_grid(&mut self, spec: &GridSpec) -> Grid<RecordedPanel> {
        self.calls.set(self.calls.get() + 1);
        self.inner.create_grid(spec)
    }
}

#[test]
fn rejected_configurations_never_reach_the_canvas() {
    let too_wide = {
        let mut opts = options(&[]);
        opts.layout.margins = Margins::new(80.0, 80.0, 10.0, 10.0);
        opts
    };
    let cases: Vec<(Vec<Scale>, Vec<Scale>, FigureOptions)> = vec![
        (Vec::new(), y_scales(), options(&[])),
        (x_scales(), Vec::new(), options(&[])),
        (x_scales(), y_scales(), options(&["a", "b", "c"])),
        (x_scales(), y_scales(), too_wide),
    ];
    for (xs, ys, opts) in cases {
        let (canvas, calls) = CountingCanvas::new();
        assert!(GridFigure::new(canvas, xs, ys, opts).is_err());
        assert_eq!(calls.get(), 0);
    }

    let (canvas, calls) = CountingCanvas::new();
    GridFigure::new(canvas, x_scales(), y_scales(), options(&[])).expect("valid figure");
    assert_eq!(calls.get(), 1);
}

/// Hands back a single row one column short of what was asked for.
struct ShortCanvas;

impl Canvas for ShortCanvas {
    type Panel = RecordedPanel;

    fn create_grid(&mut self, spec: &GridSpec) -> Grid<RecordedPanel> {
        RecordingCanvas::new().create_grid(&GridSpec { nrows: 1, ncols: spec.ncols - 1, ..*spec })
    }
}

#[test]
fn misshaped_canvas_grid_is_an_error() {
    let err = GridFigure::new(ShortCanvas, x_scales(), y_scales(), options(&[])).err();
    assert_eq!(err, Some(ConfigurationError::ShapeMismatch { expected: (3, 2), got: (1, 1) }));
}

#[test]
fn decorate_rejects_a_grid_that_does_not_match_the_scales() {
    let mut grid = RecordingCanvas::new().create_grid(&GridSpec {
        nrows: 1,
        ncols: 1,
        fractions: LayoutParams::default().fractions(1, 1).unwrap(),
        width: 160.0,
        height: 120.0,
        dpi: 100.0,
    });
    let before = grid.clone();
    let err = decorate(&mut grid, &x_scales(), &y_scales()[..1], &[]).err();
    assert_eq!(err, Some(ConfigurationError::ShapeMismatch { expected: (1, 2), got: (1, 1) }));
    assert_eq!(grid[(0, 0)], before[(0, 0)]);
}
