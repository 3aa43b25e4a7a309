use super::Extent;

/// Square grid placement for a sprite set.
///
/// The grid dimension is `floor(sqrt(count + 1))`, matching the original
/// tool. The `+ 1` leaves a trailing empty cell for most counts, but the
/// formula is known to undersize the grid near perfect squares (5 images
/// yield a 2x2 grid with only 4 cells, so the fifth lands one row below
/// the canvas and is clipped by the compositor). Kept as-is for
/// compatibility.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    /// Number of rows and columns
    pub dim: u32,
    /// Cell size, the biggest observed sprite extent
    pub cell: Extent,
}

impl GridLayout {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn new(count: usize, cell: Extent) -> Self {
        let dim = ((count as f64) + 1.0).sqrt().floor() as u32;
        Self { dim, cell }
    }

    /// Full canvas size
    pub fn canvas(&self) -> Extent {
        Extent::new(self.dim * self.cell.width, self.dim * self.cell.height)
    }

    /// Grid cell for a 0-based sprite index
    pub fn cell_of(&self, index: usize) -> (u32, u32) {
        #[allow(clippy::cast_possible_truncation)]
        let col = (index as u64 % u64::from(self.dim)) as u32;
        #[allow(clippy::cast_possible_truncation)]
        let row = (index as u64 / u64::from(self.dim)) as u32;
        (row, col)
    }

    /// Top-left pixel position for a sprite of the given size, centered
    /// within its cell.
    #[allow(clippy::cast_possible_truncation)]
    pub fn place(&self, index: usize, width: u32, height: u32) -> (i64, i64) {
        let (row, col) = self.cell_of(index);
        let x0 = i64::from(col) * i64::from(self.cell.width);
        let y0 = i64::from(row) * i64::from(self.cell.height);

        let dx = (f64::from(self.cell.width) * 0.5 - f64::from(width) * 0.5).round() as i64;
        let dy = (f64::from(self.cell.height) * 0.5 - f64::from(height) * 0.5).round() as i64;

        (x0 + dx, y0 + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimension_formula() {
        let cell = Extent::new(100, 100);

        assert_eq!(GridLayout::new(1, cell).dim, 1);
        assert_eq!(GridLayout::new(2, cell).dim, 1);
        assert_eq!(GridLayout::new(3, cell).dim, 2);
        assert_eq!(GridLayout::new(8, cell).dim, 3);
        assert_eq!(GridLayout::new(9, cell).dim, 3);
        assert_eq!(GridLayout::new(15, cell).dim, 4);
    }

    #[test]
    fn test_canvas_size() {
        let layout = GridLayout::new(5, Extent::new(100, 80));

        assert_eq!(layout.dim, 2);
        assert_eq!(layout.canvas(), Extent::new(200, 160));
    }

    #[test]
    fn test_row_column_mapping() {
        let layout = GridLayout::new(8, Extent::new(10, 10));
        assert_eq!(layout.dim, 3);

        assert_eq!(layout.cell_of(0), (0, 0));
        assert_eq!(layout.cell_of(1), (0, 1));
        assert_eq!(layout.cell_of(2), (0, 2));
        assert_eq!(layout.cell_of(3), (1, 0));
        assert_eq!(layout.cell_of(7), (2, 1));
    }

    #[test]
    fn test_placement_without_centering() {
        // Sprites that exactly fill their cell get no offset
        let layout = GridLayout::new(8, Extent::new(100, 100));

        assert_eq!(layout.place(0, 100, 100), (0, 0));
        assert_eq!(layout.place(1, 100, 100), (100, 0));
        assert_eq!(layout.place(4, 100, 100), (100, 100));
    }

    #[test]
    fn test_centering_offsets() {
        let layout = GridLayout::new(3, Extent::new(100, 100));
        assert_eq!(layout.dim, 2);

        // 40x20 sprite in a 100x100 cell: offset (30, 40)
        assert_eq!(layout.place(0, 40, 20), (30, 40));
        assert_eq!(layout.place(3, 40, 20), (130, 140));

        // Odd remainder rounds: (100 - 33) / 2 = 33.5 -> 34
        assert_eq!(layout.place(0, 33, 33), (34, 34));
    }

    #[test]
    fn test_five_sprites_undersize_the_grid() {
        // floor(sqrt(6)) = 2: four cells for five sprites. The fifth is
        // mapped to (row 2, col 0), which is outside the 2x2 canvas.
        let layout = GridLayout::new(5, Extent::new(100, 100));

        assert_eq!(layout.dim, 2);
        assert_eq!(layout.canvas(), Extent::new(200, 200));
        assert_eq!(layout.cell_of(4), (2, 0));
        assert_eq!(layout.place(4, 100, 100), (0, 200));
    }
}
