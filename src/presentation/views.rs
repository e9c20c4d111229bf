use askama::{Error as AskamaError, Template};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }

    pub fn source_tag(&self) -> &'static str {
        self.source
    }
}

pub fn render_template<T: Template>(template: T) -> Result<String, TemplateRenderError> {
    template.render().map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
    })
}

/// One `<li>` of the recent-changes list. Link markup arrives pre-rendered
/// from the host's link renderer; only the relative time is escaped.
pub struct RecentChangeItemView {
    pub page_link: String,
    pub user_link: String,
    pub relative_time: String,
}

#[derive(Template)]
#[template(path = "recent_changes.html")]
pub struct RecentChangesTemplate {
    pub items: Vec<RecentChangeItemView>,
}

/// One assembled rail section ready for serialisation.
pub struct RailModuleView {
    /// Resolved, localised header text; `None` renders no header.
    pub header: Option<String>,
    /// Full class attribute value, base classes already merged.
    pub class_attr: String,
    pub body: String,
}

#[derive(Template)]
#[template(path = "rail.html")]
pub struct RailTemplate {
    pub modules: Vec<RailModuleView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_changes_template_renders_one_item_per_record() {
        let template = RecentChangesTemplate {
            items: vec![
                RecentChangeItemView {
                    page_link: "<a href=\"/A\">A</a>".to_string(),
                    user_link: "<a href=\"/User:Bo\">Bo</a>".to_string(),
                    relative_time: "2 minutes ago".to_string(),
                },
                RecentChangeItemView {
                    page_link: "<a href=\"/B\">B</a>".to_string(),
                    user_link: "<a href=\"/User:Cy\">Cy</a>".to_string(),
                    relative_time: "5 minutes ago".to_string(),
                },
            ],
        };

        let html = render_template(template).expect("template renders");
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<a href=\"/A\">A</a>"));
        assert!(html.contains("2 minutes ago"));
    }

    #[test]
    fn relative_time_is_escaped_but_links_are_not() {
        let template = RecentChangesTemplate {
            items: vec![RecentChangeItemView {
                page_link: "<a href=\"/A\">A</a>".to_string(),
                user_link: "<a href=\"/User:Bo\">Bo</a>".to_string(),
                relative_time: "<script>now</script>".to_string(),
            }],
        };

        let html = render_template(template).expect("template renders");
        assert!(html.contains("<a href=\"/A\">A</a>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn rail_template_wraps_sections_and_skips_absent_headers() {
        let template = RailTemplate {
            modules: vec![
                RailModuleView {
                    header: Some("Recent changes".to_string()),
                    class_attr: "railModule module recentchanges-module".to_string(),
                    body: "<ul><li>x</li></ul>".to_string(),
                },
                RailModuleView {
                    header: None,
                    class_attr: "railModule module interface-module".to_string(),
                    body: "<p>notice</p>".to_string(),
                },
            ],
        };

        let html = render_template(template).expect("template renders");
        assert!(html.contains("id=\"CosmosRail\""));
        assert!(html.contains("id=\"CosmosRailInner\""));
        assert_eq!(html.matches("<h3>").count(), 1);
        assert!(html.contains("<h3>Recent changes</h3>"));
        assert_eq!(html.matches("<section").count(), 2);
        assert!(html.contains("<ul><li>x</li></ul>"));
    }
}
