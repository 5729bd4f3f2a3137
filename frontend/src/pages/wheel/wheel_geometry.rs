use shared::catalog::PrizeEntry;

/// Canvas-orientation angle (degrees, clockwise from 3 o'clock) where the
/// pointer sits: straight up.
pub const POINTER_ANGLE: f64 = 270.0;

#[derive(Debug, Clone, PartialEq)]
pub struct WheelSlice {
    pub label: String,
    pub color: String,
    pub start_angle: f64,
    pub slice_angle: f64,
}

/// One slice per catalog entry, sized by weight over the FULL catalog.
/// Sold-out prizes keep their slice on the wheel; only the selector
/// excludes them from a draw.
pub fn layout_slices(entries: &[PrizeEntry]) -> Vec<WheelSlice> {
    let total_weight: f64 = entries.iter().map(|entry| entry.weight).sum();
    let mut start_angle = 0.0;
    entries
        .iter()
        .map(|entry| {
            let slice_angle = entry.weight / total_weight * 360.0;
            let slice = WheelSlice {
                label: entry.label.clone(),
                color: entry.color.clone(),
                start_angle,
                slice_angle,
            };
            start_angle += slice_angle;
            slice
        })
        .collect()
}

pub fn slice_midpoint(slices: &[WheelSlice], index: usize) -> f64 {
    slices[index].start_angle + slices[index].slice_angle / 2.0
}

/// Rotation that parks the middle of slice `index` under the pointer after
/// at least `full_spins` extra revolutions from `current_rotation`.
pub fn target_rotation(
    slices: &[WheelSlice],
    index: usize,
    current_rotation: f64,
    full_spins: f64,
) -> f64 {
    let resting = (POINTER_ANGLE - slice_midpoint(slices, index)).rem_euclid(360.0);
    let adjustment = (resting - current_rotation.rem_euclid(360.0)).rem_euclid(360.0);
    current_rotation + full_spins * 360.0 + adjustment
}

// Easing function for smooth deceleration
pub fn ease_out_cubic(t: f64) -> f64 {
    // Modified ease-out: 1 - (1-t)^4
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::catalog::PrizeTier;

    fn entry(label: &str, weight: f64) -> PrizeEntry {
        PrizeEntry {
            label: label.to_string(),
            weight,
            quantity: 1,
            tier: PrizeTier::None,
            image: String::new(),
            color: "#123456".to_string(),
        }
    }

    #[test]
    fn test_slices_cover_the_full_circle() {
        let slices = layout_slices(&[entry("A", 1.0), entry("B", 3.0), entry("C", 4.0)]);

        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[0].slice_angle - 45.0).abs() < 1e-9);
        assert!((slices[1].slice_angle - 135.0).abs() < 1e-9);
        assert!((slices[2].slice_angle - 180.0).abs() < 1e-9);

        let end = slices[2].start_angle + slices[2].slice_angle;
        assert!((end - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_rotation_lands_midpoint_under_pointer() {
        let slices = layout_slices(&[entry("A", 1.0), entry("B", 1.0)]);

        for index in 0..slices.len() {
            let target = target_rotation(&slices, index, 123.4, 5.0);
            let landed = (slice_midpoint(&slices, index) + target).rem_euclid(360.0);
            assert!(
                (landed - POINTER_ANGLE).abs() < 1e-9,
                "slice {} landed at {}",
                index,
                landed
            );
        }
    }

    #[test]
    fn test_target_rotation_always_spins_forward() {
        let slices = layout_slices(&[entry("A", 2.0), entry("B", 5.0)]);
        let current = 777.7;
        let target = target_rotation(&slices, 1, current, 5.0);
        assert!(target >= current + 5.0 * 360.0);
        assert!(target < current + 6.0 * 360.0);
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
