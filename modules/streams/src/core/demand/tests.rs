use super::Demand;

#[test]
fn finite_zero_has_no_demand() {
  assert!(!Demand::NONE.has_demand());
  assert!(Demand::Finite(1).has_demand());
  assert!(Demand::Unbounded.has_demand());
}

#[test]
fn saturating_add_overflows_into_unbounded() {
  assert_eq!(Demand::Finite(2).saturating_add(Demand::Finite(3)), Demand::Finite(5));
  assert_eq!(Demand::Finite(u64::MAX - 1).saturating_add(Demand::Finite(1)), Demand::Unbounded);
  assert_eq!(Demand::Finite(1).saturating_add(Demand::Unbounded), Demand::Unbounded);
}

#[test]
fn capped_limits_finite_and_unbounded_demand() {
  assert_eq!(Demand::Finite(3).capped(10), 3);
  assert_eq!(Demand::Finite(30).capped(10), 10);
  assert_eq!(Demand::Unbounded.capped(10), 10);
}

#[test]
fn max_count_converts_to_unbounded() {
  assert_eq!(Demand::from(u64::MAX), Demand::Unbounded);
  assert_eq!(Demand::from(7), Demand::Finite(7));
}
