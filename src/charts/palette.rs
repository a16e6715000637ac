//! Slice color cycle, shared by the window and static renderers.

/// Ten-color categorical cycle (RGB)
pub const PALETTE: [(u8, u8, u8); 10] = [
    (31, 119, 180),  // Blue
    (255, 127, 14),  // Orange
    (44, 160, 44),   // Green
    (214, 39, 40),   // Red
    (148, 103, 189), // Purple
    (140, 86, 75),   // Brown
    (227, 119, 194), // Pink
    (127, 127, 127), // Gray
    (188, 189, 34),  // Olive
    (23, 190, 207),  // Cyan
];

/// Color for the slice at `index`, cycling through the palette.
pub fn slice_color(index: usize) -> (u8, u8, u8) {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        assert_eq!(slice_color(0), PALETTE[0]);
        assert_eq!(slice_color(3), (214, 39, 40));
        assert_eq!(slice_color(10), slice_color(0));
        assert_eq!(slice_color(23), PALETTE[3]);
    }
}
