use mazer_core::Point;

/// 4-directional neighbors of `p` in west, east, south, north order, keeping
/// only those for which `keep` returns `true`.
pub fn cardinal(p: Point, keep: impl Fn(Point) -> bool) -> impl Iterator<Item = Point> {
    p.neighbors_4().into_iter().filter(move |&n| keep(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_keeps_order() {
        let p = Point::new(1, 1);
        let all: Vec<_> = cardinal(p, |_| true).collect();
        assert_eq!(
            all,
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(1, 0),
            ]
        );
        let vertical: Vec<_> = cardinal(p, |n| n.x == 1).collect();
        assert_eq!(vertical, vec![Point::new(1, 2), Point::new(1, 0)]);
    }
}
