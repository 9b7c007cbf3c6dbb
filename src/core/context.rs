use crate::models::ActiveContext;

/// Source of the foreground application/window shown in the dialog and
/// copied into every row.
pub trait ContextProvider {
    fn active_context(&self) -> ActiveContext;
}

/// No active-window detection: always empty, so rows keep a stable shape.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyContext;

impl ContextProvider for EmptyContext {
    fn active_context(&self) -> ActiveContext {
        ActiveContext::default()
    }
}

/// Fixed context, handy when the caller already knows it.
#[derive(Debug, Clone)]
pub struct StaticContext(pub ActiveContext);

impl ContextProvider for StaticContext {
    fn active_context(&self) -> ActiveContext {
        self.0.clone()
    }
}
