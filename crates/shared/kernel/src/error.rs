use std::borrow::Cow;

/// Optional context attached to an error variant.
pub type Context = Option<Cow<'static, str>>;

/// Renders a context as ` (context)` for use inside `#[error(...)]` messages.
#[must_use]
pub fn format_context(context: &Context) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
