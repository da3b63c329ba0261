use breach_macros::Series;

#[derive(Debug, Clone, Copy, PartialEq, Series)]
pub struct Estimate {
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
}

fn main() {
    let e = Estimate { estimate: 2.0, lower: 1.0, upper: 4.0 };
    let mut series = EstimateSeries::with_capacity(10);
    series.push(&e);
    assert_eq!(series.len(), 1);
    assert!(!series.is_empty());
    assert_eq!(series.get(0), Some(e));
    assert_eq!(series.get(1), None);
    assert_eq!(Estimate::field_names(), &["estimate", "lower", "upper"]);
    assert_eq!(e.to_array(), [2.0, 1.0, 4.0]);
}
