use logic_asts::prelude::*;

#[test]
fn interval_validation_order() {
    // Negative bounds are reported before anything else
    assert_eq!(
        Interval::new(Some(-2), Some(-2)),
        Err(ValidationError::NegativeBound { bound: -2 })
    );
    assert_eq!(
        Interval::new(Some(4), Some(-1)),
        Err(ValidationError::NegativeBound { bound: -1 })
    );
    assert_eq!(
        Interval::new(Some(4), Some(4)),
        Err(ValidationError::PointInterval { bound: 4 })
    );
    assert_eq!(
        Interval::new(Some(7), Some(3)),
        Err(ValidationError::ReversedInterval { start: 7, end: 3 })
    );
    assert_eq!(
        Interval::bounded(3, 3),
        Err(ValidationError::PointInterval { bound: 3 })
    );
}

#[test]
fn open_bounds_are_valid() {
    let left = Interval::new(None, Some(0)).unwrap();
    assert_eq!((left.start(), left.end()), (None, Some(0)));
    let right = Interval::new(Some(0), None).unwrap();
    assert_eq!((right.start(), right.end()), (Some(0), None));

    let open = Interval::new(None, None).unwrap();
    assert_eq!(open, Interval::UNBOUNDED);
    assert_eq!(open, Interval::default());
    assert!(open.is_unbounded());
    assert!(!left.is_unbounded());
}

#[test]
fn interval_display() {
    assert_eq!(Interval::bounded(0, 5).unwrap().to_string(), "[0,5]");
    assert_eq!(Interval::new(None, Some(3)).unwrap().to_string(), "[,3]");
    assert_eq!(Interval::new(Some(2), None).unwrap().to_string(), "[2,]");
    assert_eq!(Interval::UNBOUNDED.to_string(), "[,]");
}

#[test]
fn interval_upper_bounds() {
    assert_eq!(Interval::bounded(1, 4).unwrap().upper(), Horizon::Bounded(4));
    assert_eq!(Interval::new(Some(1), None).unwrap().upper(), Horizon::Unbounded);
    assert_eq!(Interval::upper_of(None), Horizon::Unbounded);
    let bounds = Interval::new(None, Some(9)).unwrap();
    assert_eq!(Interval::upper_of(Some(&bounds)), Horizon::Bounded(9));
}

#[test]
fn horizon_ordering() {
    let mut horizons = vec![
        Horizon::Unbounded,
        Horizon::Bounded(3),
        Horizon::ZERO,
        Horizon::Bounded(u64::MAX),
    ];
    horizons.sort();
    assert_eq!(
        horizons,
        vec![
            Horizon::Bounded(0),
            Horizon::Bounded(3),
            Horizon::Bounded(u64::MAX),
            Horizon::Unbounded,
        ]
    );
    assert_eq!(Horizon::default(), Horizon::ZERO);
}

#[test]
fn horizon_arithmetic_saturates() {
    assert_eq!(Horizon::from(2) + Horizon::from(3), Horizon::Bounded(5));
    assert_eq!(Horizon::ZERO + Horizon::Unbounded, Horizon::Unbounded);
    assert_eq!(Horizon::Unbounded + Horizon::Unbounded, Horizon::Unbounded);
    assert_eq!(Horizon::Bounded(u64::MAX) + Horizon::from(1), Horizon::Unbounded);

    assert_eq!(Horizon::Bounded(7).bounded(), Some(7));
    assert_eq!(Horizon::Unbounded.bounded(), None);
    assert!(!Horizon::Unbounded.is_bounded());
    assert_eq!(Horizon::Unbounded.to_string(), "inf");
    assert_eq!(Horizon::Bounded(12).to_string(), "12");
}
