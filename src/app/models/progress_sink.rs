/// Port for the host's progress bar. Observational only; implementations
/// must not influence the calling operation.
pub trait ProgressSink: Send + Sync {
    fn update(&self, amount: u32, label: &str);
}
