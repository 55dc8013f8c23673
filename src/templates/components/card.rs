use maud::{html, Markup};

/// Titled glass panel used for the secondary page sections.
pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="glass-panel card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Outbound resource link with a one-line caption.
pub fn resource_link(href: &str, label: &str, caption: &str) -> Markup {
    html! {
        li {
            a href=(href) target="_blank" rel="noopener noreferrer" { (label) }
            p class="muted small" { (caption) }
        }
    }
}
