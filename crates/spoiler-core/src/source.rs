use spoiler_model::ProgressState;

/// Supplies the viewer's current progress.
///
/// Implemented by whatever owns user settings (session, profile file,
/// request context). The engine only ever asks for a snapshot.
pub trait ProgressSource {
    fn progress(&self) -> ProgressState;
}

impl ProgressSource for ProgressState {
    fn progress(&self) -> ProgressState {
        *self
    }
}

impl<T: ProgressSource + ?Sized> ProgressSource for &T {
    fn progress(&self) -> ProgressState {
        (**self).progress()
    }
}
