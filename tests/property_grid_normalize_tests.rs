use plot_rs::core::{Grid, normalize, quantize_grayscale};
use proptest::prelude::*;

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..8, 1usize..8).prop_flat_map(|(width, height)| {
        prop::collection::vec(-1_000_000.0f64..1_000_000.0, width * height)
            .prop_map(move |values| Grid::new(width, height, values).expect("valid grid"))
    })
}

proptest! {
    #[test]
    fn normalized_cells_are_finite_and_in_unit_interval(grid in grid_strategy()) {
        let normalized = normalize(&grid, None, None);
        prop_assert_eq!(normalized.values().len(), grid.values().len());
        for value in normalized.values() {
            prop_assert!(value.is_finite());
            prop_assert!((0.0..=1.0).contains(value));
        }
    }

    #[test]
    fn normalization_preserves_cell_order(grid in grid_strategy()) {
        let normalized = normalize(&grid, None, None);
        let source = grid.values();
        let mapped = normalized.values();
        for i in 0..source.len() {
            for j in 0..source.len() {
                if source[i] <= source[j] {
                    prop_assert!(mapped[i] <= mapped[j]);
                }
            }
        }
    }

    #[test]
    fn quantized_pixels_are_opaque_gray(grid in grid_strategy()) {
        let image = quantize_grayscale(&normalize(&grid, None, None));
        prop_assert_eq!(image.width(), grid.width());
        prop_assert_eq!(image.height(), grid.height());
        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.to_le_bytes();
            prop_assert_eq!(a, 0xff);
            prop_assert_eq!(r, g);
            prop_assert_eq!(g, b);
        }
    }
}
