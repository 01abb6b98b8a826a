//! Pure coordinate arithmetic shared by the grid and the (external)
//! presentation layers: cell indexing, thumbnail-picker layout and
//! pointer-to-cell mapping.

/// How many thumbnails the picker lays out per row.
pub const PICKER_COLUMNS: usize = 20;

/// Flat row-major index of the cell at `(x, y)`, or `None` when the
/// coordinate lies outside the `width` x `height` grid.
pub fn cell_index(x: usize, y: usize, width: usize, height: usize) -> Option<usize> {
    if x < width && y < height {
        Some(y * width + x)
    } else {
        None
    }
}

/// Top-left pixel of the thumbnail with the given 1-based sequence number,
/// in a left-to-right, top-to-bottom layout of `columns` thumbnails per row.
pub fn thumbnail_origin(sequence: usize, unit: usize, columns: usize) -> (usize, usize) {
    let i = sequence - 1;
    (i % columns * unit, i / columns * unit)
}

/// Cell coordinate under a pointer position, for square cells of
/// `cell_size` pixels. The result is not bounds-checked; feed it to
/// [`cell_index`] before touching the grid.
pub fn pointer_cell(pixel_x: usize, pixel_y: usize, cell_size: usize) -> (usize, usize) {
    (pixel_x / cell_size, pixel_y / cell_size)
}
