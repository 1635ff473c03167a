//! Default value functions for serde deserialization.

pub fn free_value() -> f32 {
    0.0
}

pub fn occupied_value() -> f32 {
    100.0
}

pub fn unknown_value() -> f32 {
    -1.0
}

pub fn max_occupied_threshold() -> f32 {
    50.0
}

pub fn field_of_view() -> f64 {
    std::f64::consts::TAU
}

pub fn ray_count() -> usize {
    360
}

pub fn grid_cell_size() -> f64 {
    0.05
}

pub fn step_size() -> f64 {
    0.025
}

pub fn min_region_size() -> usize {
    1
}

pub fn workers() -> usize {
    1
}
