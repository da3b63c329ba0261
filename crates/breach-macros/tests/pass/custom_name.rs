use breach_macros::Series;

#[derive(Debug, Clone, Copy, Series)]
#[series(name = "Sweep")]
pub struct SweepPoint {
    pub volume: f64,
    pub flow: f64,
}

fn main() {
    let sweep: Sweep = (1..=3)
        .map(|i| SweepPoint { volume: i as f64, flow: 10.0 * i as f64 })
        .collect();
    assert_eq!(sweep.len(), 3);
    assert_eq!(sweep.flow, vec![10.0, 20.0, 30.0]);
    assert_eq!(sweep.iter().count(), 3);
    assert_eq!(SweepPoint::field_names(), &["volume", "flow"]);
}
