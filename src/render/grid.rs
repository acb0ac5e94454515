//! Character grid owned by a single rasterization call.

/// A `height` x `width` buffer of characters, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Allocate a grid with every cell set to `filler`
    ///
    /// # Panics
    ///
    /// Panics if the grid cannot be allocated; see [`Grid::try_new`].
    pub fn new(width: usize, height: usize, filler: char) -> Self {
        match Self::try_new(width, height, filler) {
            Some(grid) => grid,
            None => panic!("cannot allocate a {}x{} grid", width, height),
        }
    }

    /// Allocate a grid, or `None` when the cell count overflows or the
    /// allocation fails
    pub fn try_new(width: usize, height: usize, filler: char) -> Option<Self> {
        let len = width.checked_mul(height)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, filler);
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Write a cell. Positions outside the grid, negative ones included,
    /// are dropped and `false` is returned.
    pub fn set(&mut self, row: i64, col: i64, c: char) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        if row >= self.height || col >= self.width {
            return false;
        }
        self.cells[row * self.width + col] = c;
        true
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Rows joined by `separator`, no terminator after the last row
    pub fn to_text(&self, separator: &str) -> String {
        self.join_rows(separator, |out, c| out.push(c))
    }

    /// Like [`Grid::to_text`] with every cell HTML-escaped
    pub fn to_html(&self, separator: &str) -> String {
        self.join_rows(separator, |out, c| match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        })
    }

    fn join_rows(&self, separator: &str, mut push: impl FnMut(&mut String, char)) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height * separator.len());
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            for &c in row {
                push(&mut out, c);
            }
        }
        out
    }
}
