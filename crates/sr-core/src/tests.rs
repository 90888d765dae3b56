//! Unit tests for sr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_and_ordering() {
        assert_eq!(NodeId(42).index(), 42);
        assert!(NodeId(0) < NodeId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinel() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert!(!NodeId::INVALID.is_valid());
        assert!(NodeId(3).is_valid());
        assert_eq!(NodeId::from_index(7), NodeId(7));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "n7");
        assert_eq!(EdgeId(3).to_string(), "e3");
    }
}

#[cfg(test)]
mod geo {
    use crate::{BoundingBox, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(53.7997, -1.5492);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(53.0, -1.5);
        let b = GeoPoint::new(54.0, -1.5);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        let equator = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 1.0));
        let leeds = GeoPoint::new(53.8, 0.0).distance_m(GeoPoint::new(53.8, 1.0));
        assert!(leeds < equator * 0.6);
    }

    #[test]
    fn bbox_edges_are_inclusive() {
        let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert!(bbox.contains(GeoPoint::new(1.0, 2.0)));
        assert!(bbox.contains(GeoPoint::new(3.0, 4.0)));
        assert!(bbox.contains(GeoPoint::new(2.0, 3.0)));
        assert!(!bbox.contains(GeoPoint::new(0.999, 3.0)));
        assert!(!bbox.contains(GeoPoint::new(2.0, 4.001)));
        assert_eq!(bbox.center(), GeoPoint::new(2.0, 3.0));
    }

    #[test]
    fn finiteness() {
        assert!(GeoPoint::new(53.8, -1.55).is_finite());
        assert!(!GeoPoint::new(f64::NAN, -1.55).is_finite());
        assert!(!GeoPoint::new(53.8, f64::INFINITY).is_finite());
        assert!(!GeoPoint::new(f64::NEG_INFINITY, f64::NAN).is_finite());
    }
}

#[cfg(test)]
mod coerce {
    use crate::{AttrValue, coerce_f64};

    #[test]
    fn list_of_text_uses_first_element() {
        let v = AttrValue::List(vec!["30".into(), "40".into()]);
        assert_eq!(coerce_f64(Some(&v), 50.0), 30.0);
    }

    #[test]
    fn non_numeric_text_uses_default() {
        assert_eq!(coerce_f64(Some(&"abc".into()), 7.0), 7.0);
    }

    #[test]
    fn absent_uses_default() {
        assert_eq!(coerce_f64(None, 7.0), 7.0);
    }

    #[test]
    fn decimal_text_parses() {
        assert_eq!(coerce_f64(Some(&"12.5".into()), 0.0), 12.5);
    }

    #[test]
    fn numbers_pass_through_unless_non_finite() {
        assert_eq!(coerce_f64(Some(&AttrValue::Number(-3.0)), 1.0), -3.0);
        assert_eq!(coerce_f64(Some(&AttrValue::Number(f64::NAN)), 1.0), 1.0);
        assert_eq!(coerce_f64(Some(&AttrValue::Number(f64::INFINITY)), 1.0), 1.0);
        assert_eq!(coerce_f64(Some(&"inf".into()), 1.0), 1.0);
    }

    #[test]
    fn odd_shapes_use_default() {
        assert_eq!(coerce_f64(Some(&AttrValue::List(vec![])), 2.0), 2.0);
        assert_eq!(coerce_f64(Some(&AttrValue::Bool(true)), 2.0), 2.0);
        let nested = AttrValue::List(vec![AttrValue::List(vec!["9".into()])]);
        assert_eq!(coerce_f64(Some(&nested), 2.0), 9.0);
    }

    #[test]
    fn parse_cell_variants() {
        assert_eq!(AttrValue::parse_cell(" 30 "), AttrValue::Number(30.0));
        assert_eq!(
            AttrValue::parse_cell("['30', '40']"),
            AttrValue::List(vec![AttrValue::Number(30.0), AttrValue::Number(40.0)])
        );
        assert_eq!(AttrValue::parse_cell("national"), AttrValue::Text("national".into()));
        assert_eq!(AttrValue::parse_cell("[]"), AttrValue::List(vec![]));
        assert_eq!(AttrValue::parse_cell("False"), AttrValue::Bool(false));
    }
}

#[cfg(test)]
mod risk_weight {
    use crate::{CoreError, RiskWeight};

    #[test]
    fn accepts_closed_unit_interval() {
        assert_eq!(RiskWeight::new(0.0).unwrap().get(), 0.0);
        assert_eq!(RiskWeight::new(1.0).unwrap().get(), 1.0);
        assert_eq!(RiskWeight::default().get(), 0.5);
    }

    #[test]
    fn rejects_instead_of_clamping() {
        assert_eq!(RiskWeight::new(1.5), Err(CoreError::InvalidRiskWeight(1.5)));
        assert!(RiskWeight::new(-0.1).is_err());
        assert!(RiskWeight::new(f64::NAN).is_err());
    }
}
