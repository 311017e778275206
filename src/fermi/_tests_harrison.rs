#[cfg(test)]
mod _tests_harrison {
    use super::super::harrison::{
        fermi_radius_from_valence, occupied_zone_area, valence_from_fermi_radius,
    };
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_radius_for_eighteen_electrons() {
        let radius = fermi_radius_from_valence(18.0).unwrap();
        assert_relative_eq!(radius, (9.0 / PI).sqrt(), epsilon = 1e-14);
        assert_relative_eq!(radius, 1.692568750643269, epsilon = 1e-12);
    }

    #[test]
    fn test_disk_area_holds_half_the_electrons() {
        for z in [1.0, 2.0, 3.0, 4.0, 18.0] {
            let radius = fermi_radius_from_valence(z).unwrap();
            assert_relative_eq!(PI * radius * radius, z / 2.0, max_relative = 1e-12);
            assert_relative_eq!(occupied_zone_area(z).unwrap(), z / 2.0);
        }
    }

    #[test]
    fn test_valence_roundtrip() {
        let radius = fermi_radius_from_valence(7.0).unwrap();
        assert_relative_eq!(valence_from_fermi_radius(radius).unwrap(), 7.0, max_relative = 1e-12);
        assert_eq!(valence_from_fermi_radius(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_electron_counts() {
        for z in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let err = fermi_radius_from_valence(z).unwrap_err();
            assert_eq!(err.parameter(), "valence_electrons");
        }
        assert!(occupied_zone_area(-1.0).is_err());
        assert_eq!(valence_from_fermi_radius(-0.1).unwrap_err().parameter(), "radius");
    }
}
