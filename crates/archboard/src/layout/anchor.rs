//! Edge-anchor selection between two boxes.
//!
//! A single dominant-axis heuristic: the connector leaves the source through
//! the side facing the target along whichever axis separates their centers
//! the most, and enters the target through the opposite side. It does not
//! route around obstacles, and boxes on a near 45° diagonal may get a
//! visually ambiguous (but always valid) choice.

use log::trace;

use archboard_core::geometry::{AnchorPair, Position, Side};

/// Chooses the exit side of `source` and the entry side of `target`.
///
/// - `|dx| > |dy|`: right to left when the target is to the right, left to
///   right otherwise.
/// - otherwise: bottom to top when the target is below or level (`dy >= 0`),
///   top to bottom when it is above.
///
/// Ties and coincident centers resolve to bottom to top.
///
/// # Examples
///
/// ```
/// # use archboard::layout::select_anchors;
/// # use archboard_core::geometry::{Anchor, Position};
/// let a = Position::new(100.0, 100.0, 140.0, 45.0);
/// let b = Position::new(500.0, 110.0, 140.0, 45.0);
///
/// let anchors = select_anchors(a, b);
/// assert_eq!(anchors.source(), Anchor::RIGHT_CENTER);
/// assert_eq!(anchors.target(), Anchor::LEFT_CENTER);
/// ```
pub fn select_anchors(source: Position, target: Position) -> AnchorPair {
    let dx = target.center_x() - source.center_x();
    let dy = target.center_y() - source.center_y();

    let exit = if dx.abs() > dy.abs() {
        if dx > 0.0 { Side::Right } else { Side::Left }
    } else if dy >= 0.0 {
        Side::Bottom
    } else {
        Side::Top
    };

    trace!(dx, dy, exit:?; "Selected anchors");
    AnchorPair::from_sides(exit, exit.opposite())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use archboard_core::geometry::Anchor;

    #[test]
    fn test_vertical_dominance_downward() {
        let a = Position::new(100.0, 100.0, 140.0, 45.0);
        let b = Position::new(100.0, 300.0, 140.0, 45.0);
        let anchors = select_anchors(a, b);
        assert_eq!(anchors.source(), Anchor::new(0.5, 1.0));
        assert_eq!(anchors.target(), Anchor::new(0.5, 0.0));
    }

    #[test]
    fn test_vertical_dominance_upward() {
        let a = Position::new(100.0, 300.0, 140.0, 45.0);
        let b = Position::new(100.0, 100.0, 140.0, 45.0);
        let anchors = select_anchors(a, b);
        assert_eq!(anchors.source(), Anchor::TOP_CENTER);
        assert_eq!(anchors.target(), Anchor::BOTTOM_CENTER);
    }

    #[test]
    fn test_horizontal_dominance_both_directions() {
        let a = Position::new(100.0, 100.0, 140.0, 45.0);
        let b = Position::new(500.0, 110.0, 140.0, 45.0);

        let right = select_anchors(a, b);
        assert_eq!(right.source(), Anchor::new(1.0, 0.5));
        assert_eq!(right.target(), Anchor::new(0.0, 0.5));

        let left = select_anchors(b, a);
        assert_eq!(left.source(), Anchor::LEFT_CENTER);
        assert_eq!(left.target(), Anchor::RIGHT_CENTER);
    }

    #[test]
    fn test_ties_resolve_vertically() {
        let a = Position::new(0.0, 0.0, 10.0, 10.0);
        let diagonal = Position::new(100.0, 100.0, 10.0, 10.0);
        assert_eq!(select_anchors(a, diagonal).source(), Anchor::BOTTOM_CENTER);

        let coincident = select_anchors(a, a);
        assert_eq!(coincident.source(), Anchor::BOTTOM_CENTER);
        assert_eq!(coincident.target(), Anchor::TOP_CENTER);
    }

    fn position_strategy() -> impl Strategy<Value = Position> {
        (
            -2000.0f32..2000.0,
            -2000.0f32..2000.0,
            1.0f32..400.0,
            1.0f32..400.0,
        )
            .prop_map(|(x, y, w, h)| Position::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn anchors_follow_dominant_axis(a in position_strategy(), b in position_strategy()) {
            let dx = b.center_x() - a.center_x();
            let dy = b.center_y() - a.center_y();
            let anchors = select_anchors(a, b);

            for anchor in [anchors.source(), anchors.target()] {
                prop_assert!((0.0..=1.0).contains(&anchor.x()));
                prop_assert!((0.0..=1.0).contains(&anchor.y()));
            }

            if dx.abs() > dy.abs() {
                prop_assert!(anchors.source().is_horizontal_center());
                prop_assert!(anchors.target().is_horizontal_center());
                // The exit side faces the target.
                prop_assert_eq!(anchors.source().x() == 1.0, dx > 0.0);
            } else if dx.abs() < dy.abs() {
                prop_assert!(anchors.source().is_vertical_center());
                prop_assert!(anchors.target().is_vertical_center());
                prop_assert_eq!(anchors.source().y() == 1.0, dy > 0.0);
            }
        }

        #[test]
        fn reversing_endpoints_mirrors_anchors(a in position_strategy(), b in position_strategy()) {
            let dx = b.center_x() - a.center_x();
            let dy = b.center_y() - a.center_y();
            // Exact ties do not mirror; skip them.
            prop_assume!(dx.abs() != dy.abs());
            prop_assume!(dx != 0.0 || dy != 0.0);

            let forward = select_anchors(a, b);
            let backward = select_anchors(b, a);
            prop_assert_eq!(forward.source(), backward.target());
            prop_assert_eq!(forward.target(), backward.source());
        }
    }
}
