/// Source of uniform samples in `[0, 1)`.
///
/// Injected everywhere randomness is consumed so tests can pin the sequence.
/// Adapters over `rand` generators live in `qts-budget`.
pub trait RandomSource {
    /// Draw the next sample. Must lie in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
