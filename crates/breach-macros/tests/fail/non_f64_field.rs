use breach_macros::Series;

#[derive(Debug, Clone, Copy, Series)]
pub struct BadRecord {
    pub estimate: f64,
    pub count: u32,
}

fn main() {}
