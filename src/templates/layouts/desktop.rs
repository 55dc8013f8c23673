use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Stocker Jobs Norway" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="site-header" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#5fa8d3"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-tabler icon-tabler-building-warehouse"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M3 21v-13l9 -4l9 4v13" {}
                      path d="M13 13h4v8h-10v-6h6" {}
                      path d="M13 21v-9a1 1 0 0 0 -1 -1h-2a1 1 0 0 0 -1 1v3" {}
                  }
                  h3 { a href="/" { "Stocker Jobs Norway" } }
                  nav {
                      ul {
                          li { a href="/" { "Openings" } }
                          li { a href="/api/jobs" { "JSON" } }
                      }
                  }
              }
                (content)
            }
        }
    }
}
