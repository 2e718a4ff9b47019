// File: crates/grapher-core/src/theme.rs
// Summary: Pastel curve palette and the letters used to name plotted functions.

/// Pastel curve colours, in assignment order.
pub const PASTEL_COLORS: [&str; 9] = [
    "#E06B74", // red
    "#62AEEF", // blue
    "#98C379", // green
    "#E5C07A", // yellow
    "#C678DD", // purple
    "#55B6C2", // cyan
    "#6C71C4", // violet
    "#7C6F64", // brown-grey
    "#cc8426", // orange
];

/// Names handed to successive functions (f, g, h, ...).
pub const FUNCTION_LETTERS: [char; 6] = ['f', 'g', 'h', 'k', 'j', 'i'];

/// Colour for the `index`-th curve, cycling through the palette.
pub fn palette_color(index: usize) -> &'static str {
    PASTEL_COLORS[index % PASTEL_COLORS.len()]
}

/// Letter for the `index`-th function, cycling through the list.
pub fn function_letter(index: usize) -> char {
    FUNCTION_LETTERS[index % FUNCTION_LETTERS.len()]
}
