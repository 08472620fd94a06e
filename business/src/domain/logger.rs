/// Logging port for the domain layer. Infrastructure adapts it onto a
/// concrete backend so use cases stay free of logging dependencies.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
