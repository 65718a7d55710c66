//! Root document component - the complete HTML page

use crate::render::styles::SITE_CSS;
use leptos::prelude::*;

/// `<html>` shell with inline styles and the tab/contact scripts.
///
/// `api_base` is written to `<body data-api-base>`; the browser scripts
/// post page views and contact messages there.
#[component]
pub fn SiteDocument(title: String, api_base: Option<String>, children: Children) -> impl IntoView {
    view! {
        <html lang="id">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body data-api-base=api_base>
                <div class="dark-container">
                    {children()}
                </div>
                <script>{TAB_SCRIPT}</script>
                <script>{CONTACT_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Tab switching script (vanilla JS)
const TAB_SCRIPT: &str = r#"
(() => {
  document.querySelectorAll(".tab-bar").forEach((bar) => {
    const scope = bar.dataset.tabScope || "";
    bar.querySelectorAll("button").forEach((btn) => {
      btn.addEventListener("click", () => {
        bar.querySelectorAll("button").forEach((b) => b.classList.remove("active"));
        btn.classList.add("active");
        const target = btn.dataset.tab;
        document.querySelectorAll(`[data-tab-panel^="${scope}-"]`).forEach((panel) => {
          panel.classList.toggle("active", panel.dataset.tabPanel === target);
        });
      });
    });
  });
})();
"#;

/// Page-view tracking and the contact form, mirroring the server-side flow:
/// one `page_view` per load, JSON POST to `/contacts`, a `contact_form`
/// event after success. Analytics failures are swallowed.
const CONTACT_SCRIPT: &str = r#"
(() => {
  const apiBase = document.body.dataset.apiBase;
  if (!apiBase) return;
  const base = apiBase.replace(/\/+$/, "");

  const track = (type, page, metadata) =>
    fetch(`${base}/analytics/page-view`, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ type, page, metadata }),
    }).catch(() => {});

  track("page_view", window.location.pathname, {
    title: document.title,
    referrer: document.referrer,
  });

  const form = document.getElementById("contact-form");
  if (!form || !form.dataset.endpoint) return;
  const banner = document.getElementById("contact-result");
  const fallbackError = form.dataset.errorFallback;
  const show = (ok, message) => {
    banner.textContent = message;
    banner.className = ok ? "form-result success" : "form-result error";
    banner.hidden = false;
  };
  const detailOf = (data) => {
    const detail = data && data.detail;
    if (typeof detail === "string" && detail) return detail;
    if (Array.isArray(detail)) {
      const msgs = detail.map((d) => d && d.msg).filter((m) => typeof m === "string");
      if (msgs.length) return msgs.join("; ");
    }
    return "";
  };

  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    const controls = form.querySelectorAll("input, select, textarea, button");
    const body = {};
    new FormData(form).forEach((value, key) => {
      body[key] = String(value).trim();
    });
    for (const key of ["phone", "company"]) {
      if (!body[key]) delete body[key];
    }
    controls.forEach((c) => (c.disabled = true));
    try {
      let res;
      try {
        res = await fetch(form.dataset.endpoint, {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify(body),
        });
      } catch (_) {
        show(false, fallbackError);
        return;
      }
      const data = await res.json().catch(() => null);
      if (!res.ok) {
        show(false, detailOf(data) || fallbackError);
        return;
      }
      show(true, (data && data.message) || form.dataset.successFallback);
      form.reset();
      track("contact_form", "contact", {
        service: body.service,
        company: body.company || null,
      });
    } finally {
      controls.forEach((c) => (c.disabled = false));
    }
  });
})();
"#;
