use num_traits::Float;


/// Multiplier turning coordinate degrees into report miles
/// Shared by edge weights and the A* heuristic so both live in the same units
pub const DISTANCE_SCALE: f64 = 100.0;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// Latitude / longitude pair, treated as a flat plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Straight line distance to `other`, scaled by DISTANCE_SCALE
    /// Symmetric and never negative
    pub fn scaled_distance(&self, other: &Coordinate) -> f64 {
        euclidean(self.latitude, self.longitude, other.latitude, other.longitude) * DISTANCE_SCALE
    }
}
