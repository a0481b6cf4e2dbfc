/// One cell of the symbol grid. `bool` is true for a black module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet written by data placement
    #[default]
    Empty,
    /// Finder, timing, alignment, dark module or reserved format/version area
    Fixed(bool),
    /// Codeword bit (or remainder bit) subject to masking
    Data(bool),
}

impl Module {
    /// Black module
    pub fn is_dark(&self) -> bool {
        matches!(self, Module::Fixed(true) | Module::Data(true))
    }

    /// Function pattern or reserved area
    pub fn is_fixed(&self) -> bool {
        matches!(self, Module::Fixed(_))
    }
}

/// Square grid of modules, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    dimension: usize,
    cells: Vec<Module>,
}

impl ModuleMatrix {
    /// Create an all-empty matrix of `dimension × dimension` modules
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Module::Empty; dimension * dimension],
        }
    }

    /// Modules per side
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get the module at (row, col), `None` out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Module> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Black module at (row, col). Out of range reads as white.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|m| m.is_dark())
    }

    /// Fixed module at (row, col). Out of range reads as fixed so nothing writes there.
    pub fn is_fixed(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none_or(|m| m.is_fixed())
    }

    /// Write a fixed module, overwriting whatever was there
    pub fn set_fixed(&mut self, row: usize, col: usize, dark: bool) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = Module::Fixed(dark);
        }
    }

    /// Write a data module. Fixed cells are left untouched.
    pub fn set_data(&mut self, row: usize, col: usize, dark: bool) {
        if let Some(i) = self.index(row, col) {
            if !self.cells[i].is_fixed() {
                self.cells[i] = Module::Data(dark);
            }
        }
    }

    /// Invert a non-fixed module (an empty cell becomes black data)
    pub fn toggle(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = match self.cells[i] {
                Module::Fixed(dark) => Module::Fixed(dark),
                Module::Data(dark) => Module::Data(!dark),
                Module::Empty => Module::Data(true),
            };
        }
    }

    /// Count of black modules
    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|m| m.is_dark()).count()
    }

    /// Count of non-fixed modules
    pub fn data_capacity(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_fixed()).count()
    }

    /// One row of modules
    pub fn row(&self, row: usize) -> &[Module] {
        let start = row * self.dimension;
        &self.cells[start..start + self.dimension]
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.dimension && col < self.dimension).then(|| row * self.dimension + col)
    }
}
