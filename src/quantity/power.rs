quantity!(Watts, i64, "W");

impl Watts {
    /// Positive power flow means consumption from the grid.
    #[must_use]
    pub const fn is_import(self) -> bool {
        self.0 > 0
    }
}
