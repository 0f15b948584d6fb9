//! Global CSS styles for Vibe Coding Studio.
//!
//! Dark slate canvas; palette color arrives only through the hero gradient's
//! inline style.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-950: #020617;
  --slate-900: #0f172a;
  --slate-900-40: rgba(15, 23, 42, 0.4);
  --slate-900-60: rgba(15, 23, 42, 0.6);
  --slate-950-40: rgba(2, 6, 23, 0.4);

  /* TEXT */
  --text-primary: #f1f5f9;
  --text-secondary: #cbd5e1;
  --text-muted: #94a3b8;

  /* HAIRLINES */
  --white-5: rgba(255, 255, 255, 0.05);
  --white-10: rgba(255, 255, 255, 0.1);
  --white-20: rgba(255, 255, 255, 0.2);
  --white-30: rgba(255, 255, 255, 0.3);
  --white-50: rgba(255, 255, 255, 0.5);
  --white-70: rgba(255, 255, 255, 0.7);

  /* Typography */
  --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-5xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
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
}

body {
  font-family: var(--font-sans);
  background: var(--slate-950);
  color: var(--text-primary);
  min-height: 100vh;
}

/* === Layout === */
.studio {
  min-height: 100vh;
}

.studio-shell {
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
  width: 100%;
  max-width: 72rem;
  padding: 3rem 1.5rem;
}

.studio-header {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.eyebrow {
  font-size: var(--text-xs);
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.3em;
  color: var(--text-muted);
}

.studio-header .eyebrow {
  font-size: var(--text-sm);
  font-weight: 400;
}

.studio-title {
  font-size: var(--text-3xl);
  font-weight: 600;
  letter-spacing: -0.025em;
}

.studio-intro {
  max-width: 42rem;
  font-size: var(--text-base);
  color: var(--text-secondary);
}

.studio-body {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

@media (min-width: 768px) {
  .studio-title { font-size: var(--text-5xl); }
  .studio-intro { font-size: var(--text-lg); }
}

@media (min-width: 1024px) {
  .studio-body { flex-direction: row; }
  .studio-aside { width: 22rem; }
}

/* === Hero === */
.hero {
  position: relative;
  flex: 1;
  overflow: hidden;
  border-radius: 1.5rem;
  border: 1px solid var(--white-10);
  background: var(--slate-900-40);
}

.hero-gradient,
.hero-grain {
  position: absolute;
  inset: 0;
}

.hero-grain {
  pointer-events: none;
  mix-blend-mode: screen;
  opacity: 0.3;
}

.hero-content {
  position: relative;
  z-index: 10;
  display: flex;
  height: 100%;
  flex-direction: column;
  justify-content: space-between;
  gap: 2.5rem;
  padding: 2.5rem;
}

.hero-intro,
.hero-loops {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.hero-title {
  font-size: var(--text-2xl);
  font-weight: 600;
}

.hero-description {
  max-width: 36rem;
  font-size: var(--text-sm);
  color: rgba(241, 245, 249, 0.8);
}

.mood-tag {
  display: inline-flex;
  align-self: flex-start;
  align-items: center;
  gap: 0.5rem;
  border-radius: 9999px;
  border: 1px solid var(--white-20);
  background: var(--white-10);
  padding: 0.25rem 1rem;
  font-size: var(--text-xs);
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.35em;
  color: rgba(255, 255, 255, 0.8);
}

/* === Prompt Loop === */
.glass-panel {
  border-radius: 1rem;
  border: 1px solid var(--white-10);
  background: var(--slate-950-40);
  backdrop-filter: blur(8px);
}

.prompt-loop {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
}

.prompt-loop-header {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
}

.prompt-loop-header .eyebrow {
  color: var(--text-secondary);
}

.prompt-text {
  font-size: var(--text-base);
  font-weight: 500;
  color: rgba(255, 255, 255, 0.9);
}

.quick-loops {
  display: grid;
  gap: 0.75rem;
  font-size: var(--text-sm);
  color: #e2e8f0;
}

@media (min-width: 640px) {
  .quick-loops { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .hero-title { font-size: var(--text-3xl); }
  .prompt-text { font-size: var(--text-lg); }
}

.quick-loop {
  border-radius: 0.75rem;
  border: 1px solid var(--white-10);
  background: var(--white-5);
  padding: 1rem;
  backdrop-filter: blur(8px);
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.quick-loop:hover {
  border-color: var(--white-30);
  background: var(--white-10);
}

/* === Buttons === */
.btn-pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: 9999px;
  border: 1px solid var(--white-20);
  background: var(--white-10);
  padding: 0.25rem 1rem;
  font: inherit;
  font-size: var(--text-xs);
  font-weight: 500;
  color: #fff;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.btn-pill:hover {
  border-color: rgba(255, 255, 255, 0.4);
  background: var(--white-20);
}

.btn-card {
  display: flex;
  width: 100%;
  align-items: flex-start;
  justify-content: space-between;
  gap: 0.75rem;
  border-radius: 1rem;
  border: 1px solid var(--white-10);
  background: var(--white-5);
  padding: 0.75rem 1rem;
  font: inherit;
  text-align: left;
  color: #e2e8f0;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.btn-card:hover {
  border-color: var(--white-30);
  background: var(--white-10);
}

.btn-card:focus-visible {
  outline: none;
  box-shadow: 0 0 0 2px var(--slate-950), 0 0 0 4px var(--white-50);
}

/* === Aside === */
.studio-aside {
  display: flex;
  width: 100%;
  flex-direction: column;
  gap: 1.5rem;
}

.aside-panel {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  border-radius: 1.5rem;
  border: 1px solid var(--white-10);
  background: var(--slate-900-60);
  padding: 1.5rem;
  backdrop-filter: blur(8px);
}

.aside-title {
  font-size: var(--text-lg);
  font-weight: 600;
  color: #fff;
}

.aside-text {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Palette List === */
.palette-list,
.ritual-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.palette-card.active {
  border-color: var(--white-70);
  background: var(--white-10);
  color: #fff;
}

.palette-copy {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.palette-name {
  font-size: var(--text-sm);
  font-weight: 600;
}

.palette-description {
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.palette-card:hover .palette-description {
  color: #e2e8f0;
}

.palette-badge {
  margin-top: 0.25rem;
  display: inline-flex;
  flex-shrink: 0;
  height: 2rem;
  width: 2rem;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  border: 1px solid var(--white-20);
  background: rgba(0, 0, 0, 0.3);
  font-size: 0.6rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.2em;
}

/* === Rituals === */
.ritual-card {
  border-radius: 1rem;
  border: 1px solid var(--white-10);
  background: var(--white-5);
  padding: 1rem;
}

.ritual-title {
  font-size: var(--text-sm);
  font-weight: 600;
  color: #fff;
}

.ritual-steps {
  margin-top: 0.5rem;
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.ritual-step {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
}

.ritual-dot {
  margin-top: 0.35rem;
  height: 0.375rem;
  width: 0.375rem;
  flex-shrink: 0;
  border-radius: 9999px;
  background: var(--white-50);
}
"#;
