/// Something that can run a raw SQL statement against a store.
///
/// This crate never implements it for a real connection; executors live
/// with whatever database driver the caller uses.
pub trait Execute {
    type Error;

    /// Runs `sql` and returns the number of affected rows.
    fn execute_raw(&mut self, sql: &str) -> Result<usize, Self::Error>;
}

