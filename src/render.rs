//! Markup components rendered to HTML before an email is sent.
//!
//! An email body can be given either as a literal `html` string or as a
//! component implementing [`RenderHtml`]. When a component is attached to a
//! [`SendEmail`](crate::resources::SendEmail), the email create operation
//! renders it into the `html` field before the request body is built.
//!
//! # Example
//!
//! ```rust
//! use unsent::render::{HtmlComponent, RenderHtml};
//!
//! struct Welcome {
//!     name: String,
//! }
//!
//! impl RenderHtml for Welcome {
//!     fn render_html(&self) -> String {
//!         format!("<h1>Welcome, {}!</h1>", self.name)
//!     }
//! }
//!
//! let component = HtmlComponent::new(Welcome { name: "Ada".to_string() });
//! assert_eq!(component.render(), "<h1>Welcome, Ada!</h1>");
//! ```

use std::fmt;
use std::sync::Arc;

/// A value that can render itself as an HTML document or fragment.
pub trait RenderHtml: Send + Sync {
    /// Renders this component to an HTML string.
    fn render_html(&self) -> String;
}

impl<F> RenderHtml for F
where
    F: Fn() -> String + Send + Sync,
{
    fn render_html(&self) -> String {
        self()
    }
}

/// A shareable handle to a [`RenderHtml`] component.
#[derive(Clone)]
pub struct HtmlComponent(Arc<dyn RenderHtml>);

impl HtmlComponent {
    /// Wraps a component.
    pub fn new(component: impl RenderHtml + 'static) -> Self {
        Self(Arc::new(component))
    }

    /// Renders the wrapped component.
    #[must_use]
    pub fn render(&self) -> String {
        self.0.render_html()
    }
}

impl fmt::Debug for HtmlComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HtmlComponent(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_component_renders() {
        let component = HtmlComponent::new(|| "<p>Hi</p>".to_string());
        assert_eq!(component.render(), "<p>Hi</p>");
    }

    #[test]
    fn test_component_is_cloneable_and_debuggable() {
        let component = HtmlComponent::new(|| "<div/>".to_string());
        let cloned = component.clone();
        assert_eq!(cloned.render(), "<div/>");
        assert_eq!(format!("{component:?}"), "HtmlComponent(..)");
    }
}
