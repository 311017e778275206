#[cfg(test)]
mod _tests_geometry2d {
    use super::super::geometry2d::Disk;
    use super::super::geometry2d_bounding_box::BoundingBox2D;
    use nalgebra::Vector2;

    #[test]
    fn test_disk_contains_interior_and_boundary() {
        let disk = Disk::new(Vector2::new(1.0, 0.0), 0.5);

        assert!(disk.contains_point(Vector2::new(1.0, 0.0)), "Center must be covered");
        assert!(disk.contains_point(Vector2::new(1.2, 0.1)));
        // Exactly on the rim: 0.5² == 0.25
        assert!(disk.contains_point(Vector2::new(1.5, 0.0)), "Rim point must be covered");
        assert!(disk.contains_point(Vector2::new(1.0, -0.5)));
        assert!(!disk.contains_point(Vector2::new(1.5 + 1e-9, 0.0)));
        assert!(!disk.contains_point(Vector2::new(0.0, 0.0)));
    }

    #[test]
    fn test_zero_radius_disk_is_a_point() {
        let disk = Disk::new(Vector2::new(-1.0, 2.0), 0.0);
        assert!(disk.contains_point(Vector2::new(-1.0, 2.0)));
        assert!(!disk.contains_point(Vector2::new(-1.0, 2.0 + 1e-12)));
    }

    #[test]
    fn test_disk_intersects_box() {
        let region = BoundingBox2D::centered_square(1.5);

        // Touches the right edge exactly
        assert!(Disk::new(Vector2::new(3.0, 0.0), 1.5).intersects_box(&region));
        assert!(!Disk::new(Vector2::new(3.0, 0.0), 1.49).intersects_box(&region));

        // Corner distance from (3, 3) to (1.5, 1.5) is 1.5·√2
        assert!(!Disk::new(Vector2::new(3.0, 3.0), 2.0).intersects_box(&region));
        assert!(Disk::new(Vector2::new(3.0, 3.0), 2.2).intersects_box(&region));

        // Centers inside the box always intersect
        assert!(Disk::new(Vector2::new(0.0, 0.0), 0.0).intersects_box(&region));
    }
}
