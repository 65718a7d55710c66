//! CSS for the rendered site.
//!
//! Kept free of `<`, `>` and `&` so it can be inlined verbatim.

/// Dark corporate theme with the brand accent.
pub const SITE_CSS: &str = r#"
:root {
  --bg-primary: #0b0d10;
  --bg-secondary: #13161b;
  --bg-overlay: rgba(255, 255, 255, 0.03);
  --border-subtle: rgba(255, 255, 255, 0.08);
  --text-primary: #ffffff;
  --text-secondary: #b7bcc5;
  --text-muted: #7c828c;
  --brand-primary: #00ffd1;
  --brand-hover: rgba(0, 255, 209, 0.1);
  --warning: #facc15;
  --error: #f87171;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg-primary);
  color: var(--text-secondary);
  font-family: "Inter", system-ui, sans-serif;
  line-height: 1.6;
}

a { color: inherit; text-decoration: none; }

.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.section { padding: 128px 0; position: relative; }
.section-header { text-align: center; margin-bottom: 80px; }

.display-huge { font-size: 64px; color: var(--text-primary); line-height: 1.1; margin: 0; }
.display-large { font-size: 48px; color: var(--text-primary); margin: 0 0 24px; }
.display-medium { font-size: 36px; color: var(--brand-primary); }
.heading-2 { font-size: 32px; color: var(--text-primary); }
.heading-3 { font-size: 22px; color: var(--text-primary); }
.body-large { font-size: 18px; }
.body-small { font-size: 14px; color: var(--text-muted); }
.accent { color: var(--brand-primary); }

.site-header {
  position: fixed; top: 0; left: 0; right: 0; z-index: 10;
  display: flex; justify-content: space-between; align-items: center;
  padding: 16px 32px; background: rgba(11, 13, 16, 0.9);
  border-bottom: 1px solid var(--border-subtle);
}
.company-logo { font-size: 24px; letter-spacing: 4px; color: var(--brand-primary); margin: 0; }
.site-nav a { margin-left: 24px; }
.site-nav a:hover { color: var(--brand-primary); }

.btn-primary, .btn-secondary {
  display: inline-flex; align-items: center; gap: 8px;
  padding: 14px 28px; border: 1px solid var(--brand-primary); cursor: pointer;
  font-weight: 600;
}
.btn-primary { background: var(--brand-primary); color: #000; }
.btn-secondary { background: transparent; color: var(--brand-primary); }
.btn-primary[disabled] { opacity: 0.5; cursor: wait; }

.card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 32px; }
.card, .service-card, .partner-card, .info-card {
  background: var(--bg-secondary); border: 1px solid var(--border-subtle); padding: 32px;
}
.card-icon {
  width: 64px; height: 64px; display: flex; align-items: center; justify-content: center;
  background: var(--brand-primary); color: #000; font-size: 28px; margin-bottom: 24px;
}
.feature-list { list-style: none; padding: 0; }
.feature-list li::before { content: "\25AA"; color: var(--brand-primary); margin-right: 12px; }

.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 32px; margin-top: 80px; }
.stat { text-align: center; padding: 32px; background: var(--bg-overlay); border: 1px solid var(--border-subtle); }

.tab-bar { display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; margin-bottom: 64px; }
.tab-bar button {
  display: inline-flex; align-items: center; gap: 12px; padding: 12px 24px;
  background: transparent; color: var(--text-secondary); border: 1px solid var(--border-subtle); cursor: pointer;
}
.tab-bar button.active { background: var(--brand-hover); color: var(--brand-primary); border-color: var(--brand-primary); }
.tab-panel { display: none; background: var(--bg-secondary); border: 1px solid var(--border-subtle); padding: 48px; }
.tab-panel.active { display: block; }

.feature-row { display: flex; align-items: center; gap: 16px; padding: 16px; background: var(--bg-overlay); border: 1px solid var(--border-subtle); }
.tech-tag { display: inline-block; padding: 4px 12px; margin: 0 8px 8px 0; color: var(--brand-primary); border: 1px solid var(--brand-primary); background: var(--brand-hover); }
.meta-row { display: flex; justify-content: space-between; }

.gradient { color: #fff; }
.from-green-500.to-emerald-600 { background: linear-gradient(135deg, #22c55e, #059669); }
.from-blue-500.to-cyan-600 { background: linear-gradient(135deg, #3b82f6, #0891b2); }
.from-red-500.to-orange-600 { background: linear-gradient(135deg, #ef4444, #ea580c); }
.from-purple-500.to-indigo-600 { background: linear-gradient(135deg, #a855f7, #4f46e5); }

.fallback-notice { color: var(--warning); font-size: 14px; }
.skeleton { height: 384px; background: var(--bg-secondary); border: 1px solid var(--border-subtle); animation: pulse 1.5s infinite; }
@keyframes pulse { 50% { opacity: 0.5; } }

.contact-form label { display: block; margin-bottom: 8px; }
.contact-form input, .contact-form select, .contact-form textarea {
  width: 100%; padding: 12px 16px; background: var(--bg-primary); color: var(--text-primary);
  border: 1px solid var(--border-subtle); margin-bottom: 24px;
}
.form-result { padding: 16px; margin-bottom: 24px; border: 1px solid; }
.form-result.success { color: var(--brand-primary); border-color: var(--brand-primary); }
.form-result.error { color: var(--error); border-color: var(--error); }

.site-footer { border-top: 1px solid var(--border-subtle); padding: 64px 0 32px; }
.footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 48px; }
.footer-bottom { margin-top: 48px; padding-top: 24px; border-top: 1px solid var(--border-subtle); font-size: 14px; }
"#;
