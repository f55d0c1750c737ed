use approx::assert_abs_diff_eq;
use chart_motion::core::{ScreenPoint, Viewport};
use chart_motion::interaction::{TooltipPlacement, TooltipStyle, layout_tooltip};
use proptest::prelude::*;

fn lines() -> Vec<String> {
    vec!["Income".to_owned(), "1250.00".to_owned(), "Tue".to_owned()]
}

#[test]
fn tooltip_sits_centered_above_the_point() {
    let style = TooltipStyle::default();
    let anchor = ScreenPoint::new(200.0, 150.0);
    let tooltip = layout_tooltip(anchor, &lines(), Viewport::new(400, 300), &style)
        .expect("tooltip for non-empty lines");

    assert_eq!(tooltip.placement, TooltipPlacement::Above);
    // 2 * padding + font + 2 * line height
    assert_abs_diff_eq!(tooltip.rect.height, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tooltip.rect.y, 76.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        tooltip.rect.x + tooltip.rect.width / 2.0,
        anchor.x,
        epsilon = 1e-9
    );

    let [left, right, tip] = tooltip.caret;
    assert_eq!(tip, anchor);
    assert_abs_diff_eq!(left.y, tooltip.rect.bottom(), epsilon = 1e-9);
    assert_abs_diff_eq!(right.y, tooltip.rect.bottom(), epsilon = 1e-9);
    assert!(tip.y > left.y, "caret points down toward the point");
}

#[test]
fn tooltip_flips_below_when_top_would_clip() {
    let style = TooltipStyle::default();
    let anchor = ScreenPoint::new(200.0, 20.0);
    let tooltip = layout_tooltip(anchor, &lines(), Viewport::new(400, 300), &style)
        .expect("tooltip");

    assert_eq!(tooltip.placement, TooltipPlacement::Below);
    assert_abs_diff_eq!(tooltip.rect.y, 34.0, epsilon = 1e-9);
    let [left, _, tip] = tooltip.caret;
    assert_abs_diff_eq!(left.y, tooltip.rect.y, epsilon = 1e-9);
    assert!(tip.y < left.y, "caret points up toward the point");
}

#[test]
fn tooltip_is_shifted_inside_horizontal_edges() {
    let style = TooltipStyle::default();
    let surface = Viewport::new(400, 300);

    let right = layout_tooltip(ScreenPoint::new(398.0, 150.0), &lines(), surface, &style)
        .expect("tooltip");
    assert_abs_diff_eq!(right.rect.right(), 392.0, epsilon = 1e-9);
    assert_eq!(right.caret[2], ScreenPoint::new(398.0, 150.0));

    let left = layout_tooltip(ScreenPoint::new(2.0, 150.0), &lines(), surface, &style)
        .expect("tooltip");
    assert_abs_diff_eq!(left.rect.x, 8.0, epsilon = 1e-9);
}

#[test]
fn text_lines_are_stacked_inside_the_box() {
    let style = TooltipStyle::default();
    let tooltip = layout_tooltip(
        ScreenPoint::new(200.0, 150.0),
        &lines(),
        Viewport::new(400, 300),
        &style,
    )
    .expect("tooltip");

    assert_eq!(tooltip.lines.len(), 3);
    assert_eq!(tooltip.lines[1].text, "1250.00");
    for pair in tooltip.lines.windows(2) {
        assert_abs_diff_eq!(
            pair[1].baseline_y - pair[0].baseline_y,
            style.line_height_px,
            epsilon = 1e-9
        );
    }
    let last = tooltip.lines.last().expect("lines");
    assert!(last.baseline_y <= tooltip.rect.bottom());
}

#[test]
fn nothing_to_show_yields_no_tooltip() {
    let style = TooltipStyle::default();
    assert!(layout_tooltip(ScreenPoint::new(10.0, 10.0), &[], Viewport::new(100, 100), &style).is_none());
}

proptest! {
    #[test]
    fn tooltip_stays_within_horizontal_margins(
        x in 0.0f64..400.0,
        y in 0.0f64..300.0
    ) {
        let style = TooltipStyle::default();
        let tooltip = layout_tooltip(
            ScreenPoint::new(x, y),
            &lines(),
            Viewport::new(400, 300),
            &style,
        )
        .expect("tooltip");

        prop_assert!(tooltip.rect.x >= style.edge_margin_px - 1e-9);
        prop_assert!(tooltip.rect.right() <= 400.0 - style.edge_margin_px + 1e-9);
        if tooltip.placement == TooltipPlacement::Above {
            prop_assert!(tooltip.rect.y >= style.edge_margin_px);
        }
        prop_assert_eq!(tooltip.caret[2], ScreenPoint::new(x, y));
    }
}
