use almanac_geometry::Region;
use approx::assert_abs_diff_eq;

#[test]
fn edges_hold_at_every_depth() {
    let mut parent = Region::root(297.0, 210.0);
    for depth in 1..=12 {
        let x = depth as f64 * 0.75;
        let y = depth as f64 * 1.25;
        let child = Region::within(&parent, x, y, parent.width() / 2.0, parent.height() / 2.0);
        assert_abs_diff_eq!(child.left(), parent.left() + x);
        assert_abs_diff_eq!(child.right(), child.left() + child.width());
        assert_abs_diff_eq!(child.top(), parent.top() + y);
        assert_abs_diff_eq!(child.bottom(), child.top() + child.height());
        parent = child;
    }
}

#[test]
fn negative_offsets_are_allowed() {
    let page = Region::root(100.0, 100.0);
    let canvas = Region::within(&page, 10.0, 10.0, 80.0, 80.0);
    let bleed = Region::within(&canvas, -0.5, -1.0, 81.0, 82.0);
    assert_abs_diff_eq!(bleed.left(), 9.5);
    assert_abs_diff_eq!(bleed.top(), 9.0);
    assert_abs_diff_eq!(bleed.right(), 90.5);
    assert_abs_diff_eq!(bleed.bottom(), 91.0);
}

#[test]
fn shrink_keeps_parent_frame() {
    let page = Region::root(297.0, 210.0);
    let canvas = Region::within(&page, 10.0, 20.0, 277.0, 180.0);
    let inner = canvas.shrink(1.0, Some(2.0));
    assert_abs_diff_eq!(inner.left(), 11.0);
    assert_abs_diff_eq!(inner.top(), 22.0);
    assert_abs_diff_eq!(inner.right(), canvas.right() - 1.0);
    assert_abs_diff_eq!(inner.bottom(), canvas.bottom() - 2.0);
}
