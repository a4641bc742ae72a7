//! Global CSS styles for the Huddle room window.
//!
//! Transcript rules live in `huddle_ui::TRANSCRIPT_STYLES`; this sheet
//! covers the page around it.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --room-black: #0b0d10;
  --room-panel: #13171c;
  --room-border: #222a33;

  /* Accents */
  --accent: #3fa7ff;
  --accent-glow: rgba(63, 167, 255, 0.3);
  --live: #ff4d5e;

  /* Text */
  --text-primary: #f2f4f7;
  --text-secondary: rgba(242, 244, 247, 0.7);
  --text-muted: rgba(242, 244, 247, 0.5);

  /* Bubbles */
  --bubble-local: #1f2a33;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;

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

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--room-black);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Room Shell === */
.room {
  display: grid;
  grid-template-rows: auto 1fr auto;
  height: 100vh;
}

.room-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--room-border);
  background: var(--room-panel);
}

.room-title {
  font-size: var(--text-lg);
  font-weight: 600;
  flex: 1;
}

.room-live {
  font-size: var(--text-xs);
  color: var(--live);
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.room-count {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Room Chat === */
.room-chat {
  overflow-y: auto;
  min-height: 0;
}

.room-footer {
  display: flex;
  justify-content: flex-end;
  padding: 0.75rem 1rem;
  border-top: 1px solid var(--room-border);
}

/* === Buttons === */
.btn-toggle {
  padding: 0.5rem 1.25rem;
  background: transparent;
  border: 1px solid var(--room-border);
  border-radius: 999px;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-toggle:hover {
  border-color: var(--accent);
  box-shadow: 0 0 12px var(--accent-glow);
}

.btn-toggle[aria-pressed="true"] {
  border-color: var(--accent);
  color: var(--accent);
}

/* === Accessibility === */
*:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}
"#;
