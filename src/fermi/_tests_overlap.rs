#[cfg(test)]
mod _tests_overlap {
    use super::super::overlap::count_overlaps;
    use crate::interfaces::Point;
    use crate::lattice::{LatticePointSet, select_lattice_range};

    fn line_lattice() -> LatticePointSet {
        LatticePointSet::from_coords(vec![(-1, 0), (0, 0), (1, 0)])
    }

    #[test]
    fn test_single_disk_covers_its_center() {
        let lattice = LatticePointSet::from_coords(vec![(0, 0)]);
        assert_eq!(count_overlaps(Point::new(0.0, 0.0), 0.5, &lattice), 1);
        assert_eq!(count_overlaps(Point::new(0.6, 0.0), 0.5, &lattice), 0);
    }

    #[test]
    fn test_three_disks_reach_origin() {
        // |±1| <= 1.2, so all three disks cover Γ
        assert_eq!(count_overlaps(Point::new(0.0, 0.0), 1.2, &line_lattice()), 3);
        // Only the right-hand disks reach (0.9, 0)
        assert_eq!(count_overlaps(Point::new(0.9, 0.0), 0.95, &line_lattice()), 2);
    }

    #[test]
    fn test_boundary_point_is_covered() {
        let lattice = LatticePointSet::from_coords(vec![(0, 0)]);
        // 3-4-5 triangle with dyadic coordinates: distance² == r² exactly
        assert_eq!(count_overlaps(Point::new(0.75, 1.0), 1.25, &lattice), 1);
        assert_eq!(count_overlaps(Point::new(0.5, 0.0), 0.5, &lattice), 1);
        assert_eq!(count_overlaps(Point::new(1.0, 0.0), 1.0, &lattice), 1);
        assert_eq!(count_overlaps(Point::new(1.0 + 1e-9, 0.0), 1.0, &lattice), 0);
    }

    #[test]
    fn test_midpoint_between_neighbours() {
        // (0.5, 0) sits exactly on the rims of the disks at (0,0) and (1,0)
        let lattice = select_lattice_range(0.5).unwrap();
        assert_eq!(count_overlaps(Point::new(0.5, 0.0), 0.5, &lattice), 2);
        // Zone corner (0.5, 0.5) is √0.5 from four lattice points
        assert_eq!(count_overlaps(Point::new(0.5, 0.5), 0.5, &lattice), 0);
        assert_eq!(count_overlaps(Point::new(0.5, 0.5), 0.71, &lattice), 4);
    }

    #[test]
    fn test_zero_radius_counts_only_exact_hits() {
        let lattice = select_lattice_range(0.0).unwrap();
        assert_eq!(count_overlaps(Point::new(1.0, -1.0), 0.0, &lattice), 1);
        assert_eq!(count_overlaps(Point::new(1.0, -0.999), 0.0, &lattice), 0);
    }

    #[test]
    fn test_empty_lattice_counts_nothing() {
        let lattice = LatticePointSet::from_coords(Vec::new());
        assert_eq!(count_overlaps(Point::new(0.0, 0.0), 10.0, &lattice), 0);
    }

    #[test]
    fn test_count_is_independent_of_iteration_order() {
        let radius = 1.6926;
        let lattice = select_lattice_range(radius).unwrap();
        let reversed = lattice.reversed();

        // Interleave the two halves for a third, scrambled ordering
        let coords: Vec<(i32, i32)> = lattice.coords().iter().map(|c| (c.x, c.y)).collect();
        let (front, back) = coords.split_at(coords.len() / 2);
        let scrambled = LatticePointSet::from_coords(
            back.iter().zip(front.iter()).flat_map(|(&a, &b)| [a, b]).chain(back.iter().skip(front.len()).copied()),
        );
        assert_eq!(scrambled.len(), lattice.len());

        for &(x, y) in &[(0.0, 0.0), (0.3, -1.1), (1.49, 1.49), (-0.5, 0.5), (0.77, 0.13)] {
            let point = Point::new(x, y);
            let expected = count_overlaps(point, radius, &lattice);
            assert_eq!(count_overlaps(point, radius, &reversed), expected);
            assert_eq!(count_overlaps(point, radius, &scrambled), expected);
        }
    }

    #[test]
    fn test_count_does_not_modify_lattice() {
        let lattice = select_lattice_range(1.0).unwrap();
        let before = lattice.clone();
        let _ = count_overlaps(Point::new(0.2, 0.4), 1.0, &lattice);
        assert_eq!(lattice, before);
    }
}
