/// Logging port for the application layer. The marketplace binary plugs in
/// a tracing-backed adapter; tests plug in mocks.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
