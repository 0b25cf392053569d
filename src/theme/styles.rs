//! Global CSS styles for the Personal Finance Survey.
//!
//! Light gray canvas, white cards, a single blue accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #f3f4f6;
  --surface: #ffffff;
  --border: #e5e7eb;

  --primary: #2563eb;
  --primary-hover: #1d4ed8;
  --primary-soft: #dbeafe;

  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  --danger: #b91c1c;
  --danger-soft: #fee2e2;
  --success: #15803d;
  --success-soft: #dcfce7;

  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  --radius: 0.5rem;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  min-height: 100%;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.5;
}

/* === Layout === */
.page-centered {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem 1rem;
}

.page-padded {
  max-width: 42rem;
  margin: 0 auto;
  padding: 3rem 1rem;
}

/* === Landing === */
.landing {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.hero {
  text-align: center;
  padding: 5rem 1rem 3rem;
}

.hero-title {
  font-size: 2.5rem;
  font-weight: 800;
  max-width: 40rem;
  margin: 0 auto 1rem;
}

.hero-tagline {
  font-size: 1.125rem;
  color: var(--text-secondary);
  max-width: 36rem;
  margin: 0 auto 2rem;
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1.5rem;
  max-width: 60rem;
  margin: 0 auto;
  padding: 0 1rem 3rem;
}

.footer {
  margin-top: auto;
  padding: 1.5rem;
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Cards === */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
  padding: 1.5rem;
}

.auth-card,
.thanks-card {
  width: 100%;
  max-width: 28rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.card-heading {
  font-size: 1.5rem;
  font-weight: 700;
  text-align: center;
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.muted { color: var(--text-secondary); }

.hint {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Forms === */
.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.form-label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input {
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  font-size: 1rem;
}

.form-input:focus {
  outline: 2px solid var(--primary-soft);
  border-color: var(--primary);
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  padding: 0.5rem 1.25rem;
  border-radius: var(--radius);
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--primary);
  color: #ffffff;
  border: none;
}

.btn-primary:hover:not(:disabled) { background: var(--primary-hover); }

.btn-secondary {
  background: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-primary:disabled,
.btn-secondary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-large {
  padding: 0.75rem 2rem;
  font-size: 1.125rem;
}

.btn-block { width: 100%; }

.btn-link {
  background: none;
  border: none;
  color: var(--primary);
  font-size: 0.875rem;
  text-align: center;
  text-decoration: none;
  cursor: pointer;
}

.btn-link:hover { text-decoration: underline; }

/* === Notices === */
.notice {
  padding: 0.75rem 1rem;
  border-radius: var(--radius);
  font-size: 0.875rem;
}

.notice-error {
  background: var(--danger-soft);
  color: var(--danger);
}

.notice-success {
  background: var(--success-soft);
  color: var(--success);
}

/* === Survey === */
.survey-card {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.survey-header {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.progress-track {
  height: 0.5rem;
  background: var(--border);
  border-radius: 9999px;
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: var(--primary);
  transition: width var(--transition-fast);
}

.question-prompt {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: 1rem;
}

.option-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.option {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  cursor: pointer;
}

.option:hover { background: var(--bg); }

.option--checked {
  border-color: var(--primary);
  background: var(--primary-soft);
}

.survey-nav {
  display: flex;
  justify-content: space-between;
}
"#;
