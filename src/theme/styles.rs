//! Global CSS styles for linkpage.
//!
//! Frosted glass over a full-window photo, single centered column.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* GLASS (Surfaces) */
  --glass: rgba(255, 255, 255, 0.14);
  --glass-strong: rgba(255, 255, 255, 0.24);
  --glass-border: rgba(255, 255, 255, 0.28);
  --glass-blur: blur(14px);

  /* INK (Overlay, Fallback Background) */
  --ink: #14121a;
  --ink-overlay: rgba(10, 8, 16, 0.45);

  /* ACCENT */
  --rose: #f2a7c3;
  --rose-glow: rgba(242, 167, 195, 0.4);

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.8);
  --text-muted: rgba(255, 255, 255, 0.55);

  /* SEMANTIC */
  --danger: #ff6b81;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-serif: 'Playfair Display', Georgia, serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Shape */
  --radius-sm: 10px;
  --radius-md: 16px;
  --radius-pill: 999px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--ink);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
}

/* === Layout === */
.site {
  position: relative;
  min-height: 100vh;
}

.site-background {
  position: fixed;
  inset: 0;
  z-index: 0;
  background: linear-gradient(160deg, #2b2238 0%, var(--ink) 100%);
  background-size: cover;
  background-position: center;
}

.site-background__overlay {
  position: absolute;
  inset: 0;
  background: var(--ink-overlay);
}

.site-main {
  position: relative;
  z-index: 1;
  display: flex;
  justify-content: center;
  padding: 2.5rem 1.25rem 6rem;
}

.site-column {
  width: 100%;
  max-width: 28rem;
}

.startup-error {
  margin: 3rem auto;
  max-width: 28rem;
  padding: 1rem 1.25rem;
  border: 1px solid var(--danger);
  border-radius: var(--radius-md);
  color: var(--danger);
  background: rgba(255, 107, 129, 0.08);
}

/* === Buttons === */
.btn-link,
.btn-ghost {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  cursor: pointer;
  border: 1px solid var(--glass-border);
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-link {
  width: 100%;
  padding: 0.95rem 1.1rem;
  border-radius: var(--radius-md);
  background: var(--glass);
  backdrop-filter: var(--glass-blur);
  -webkit-backdrop-filter: var(--glass-blur);
  font-size: var(--text-base);
  font-weight: 500;
  text-align: left;
}

.btn-link:hover {
  background: var(--glass-strong);
  transform: translateY(-1px);
}

.btn-ghost {
  display: inline-flex;
  padding: 0.45rem 0.9rem;
  border-radius: var(--radius-pill);
  background: transparent;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.btn-ghost:hover {
  background: var(--glass);
  color: var(--text-primary);
}

.btn-link:disabled,
.btn-ghost:disabled {
  opacity: 0.5;
  cursor: not-allowed;
  transform: none;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--glass-border);
  background: var(--glass-strong);
  backdrop-filter: var(--glass-blur);
  -webkit-backdrop-filter: var(--glass-blur);
  cursor: pointer;
}

.link-icon {
  width: 1.5rem;
  text-align: center;
}

.link-label {
  flex: 1;
}

.link-chevron {
  color: var(--text-muted);
}

/* === Music Toggle === */
.music-toggle {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  z-index: 10;
  width: 3.25rem;
  height: 3.25rem;
  font-size: var(--text-lg);
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.35);
}

.music-toggle:hover {
  box-shadow: 0 0 0 4px var(--rose-glow);
}

.music-toggle--pending {
  animation: music-pulse 1.2s ease-in-out infinite;
}

@keyframes music-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.55; }
}

/* === Image Upload === */
.image-upload-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.45rem 0.9rem;
  border-radius: var(--radius-pill);
  border: 1px solid var(--glass-border);
  background: transparent;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  cursor: pointer;
}

.image-upload-btn--icon {
  position: absolute;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  border: 1px solid var(--glass-border);
  background: rgba(0, 0, 0, 0.55);
  font-size: var(--text-sm);
  cursor: pointer;
}

.image-upload-btn:disabled,
.image-upload-btn--icon:disabled {
  cursor: progress;
  opacity: 0.7;
}

/* === Home === */
.home {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.75rem;
}

.home-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  text-align: center;
}

.avatar {
  position: relative;
  width: 7rem;
  height: 7rem;
  margin-bottom: 0.5rem;
}

.avatar__img,
.avatar__placeholder {
  width: 100%;
  height: 100%;
  border-radius: 50%;
  border: 3px solid var(--glass-border);
  object-fit: cover;
}

.avatar__placeholder {
  background: var(--glass);
}

.avatar__upload {
  right: 0;
  bottom: 0;
}

.home-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
  text-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
}

.home-tagline {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.link-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  width: 100%;
}

.home-footer {
  display: flex;
  justify-content: center;
}

/* === Service Detail === */
.service-detail {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding: 1.25rem;
  border-radius: var(--radius-md);
  border: 1px solid var(--glass-border);
  background: var(--glass);
  backdrop-filter: var(--glass-blur);
  -webkit-backdrop-filter: var(--glass-blur);
}

.service-detail__title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
}

.service-detail__summary {
  margin-top: 0.25rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.service-markdown {
  color: var(--text-secondary);
  line-height: 1.6;
}

.service-markdown p + p,
.service-markdown ul,
.service-markdown ol {
  margin-top: 0.6rem;
}

.service-markdown ul,
.service-markdown ol {
  padding-left: 1.25rem;
}

.service-markdown strong {
  color: var(--text-primary);
}

/* === Gallery === */
.gallery {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.6rem;
}

.gallery__item {
  position: relative;
  aspect-ratio: 1 / 1;
  overflow: hidden;
  border-radius: var(--radius-sm);
  background: rgba(0, 0, 0, 0.25);
}

.gallery__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.gallery__placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
  color: var(--text-muted);
  font-size: var(--text-xl);
}

.gallery__upload {
  right: 0.4rem;
  bottom: 0.4rem;
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: var(--text-xs);
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.input-hint {
  text-transform: none;
  letter-spacing: 0;
}

.input-field {
  padding: 0.7rem 0.9rem;
  border-radius: var(--radius-sm);
  border: 1px solid var(--glass-border);
  background: rgba(0, 0, 0, 0.25);
  color: var(--text-primary);
  font: inherit;
  font-size: var(--text-lg);
  font-weight: 600;
  outline: none;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  border-color: var(--rose);
}

.input-field:disabled {
  opacity: 0.5;
}
"#;
