//! Global CSS styles for Gamer Tags.
//!
//! Two palettes keyed off the root element's `.theme-dark` / `.theme-light`
//! class. Components only reference the custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Accent */
  --purple: #a855f7;
  --purple-strong: #9333ea;
  --pink: #db2777;
  --blue: #2563eb;
  --blue-strong: #1d4ed8;
  --red: #dc2626;
  --red-strong: #b91c1c;
  --gray: #4b5563;
  --gray-strong: #374151;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

.theme-dark {
  --bg-from: #111827;
  --bg-to: #1f2937;
  --surface: #374151;
  --surface-border: #4b5563;
  --card-from: #1f2937;
  --card-to: #111827;
  --card-border: #374151;
  --text: #ffffff;
  --text-muted: #9ca3af;
}

.theme-light {
  --bg-from: #f3f4f6;
  --bg-to: #ffffff;
  --surface: #f3f4f6;
  --surface-border: #d1d5db;
  --card-from: #f3f4f6;
  --card-to: #ffffff;
  --card-border: #d1d5db;
  --text: #111827;
  --text-muted: #6b7280;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

/* === Layout === */
.app {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  color: var(--text);
  background: linear-gradient(135deg, var(--bg-from), var(--bg-to));
  transition: background var(--transition-slow), color var(--transition-slow);
  overflow: hidden;
}

.container {
  width: 100%;
  max-width: 72rem;
  margin: 0 auto;
}

.app-header {
  text-align: center;
  margin-bottom: 2rem;
}

.app-title,
.profile-card-title {
  font-weight: 700;
  color: transparent;
  background: linear-gradient(90deg, #c084fc, var(--pink));
  -webkit-background-clip: text;
  background-clip: text;
}

.app-title {
  font-size: 2.25rem;
  margin-bottom: 0.5rem;
}

.app-subtitle {
  font-size: 1.125rem;
  opacity: 0.8;
}

.app-columns {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

@media (min-width: 768px) {
  .app-columns {
    flex-direction: row;
  }
}

.app-column {
  flex: 1;
}

/* === Tag Inputs === */
.tag-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.tag-input {
  position: relative;
  margin-bottom: 0.5rem;
  animation: rise-in var(--transition-normal);
}

.tag-input-field {
  width: 100%;
  padding: 1.5rem 1rem 0.75rem;
  border-radius: 0.375rem;
  border: 2px solid var(--surface-border);
  background: var(--surface);
  color: var(--text);
  font-size: 1rem;
  outline: none;
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.tag-input-field::placeholder {
  color: transparent;
}

.tag-input.focused .tag-input-field {
  border-color: var(--purple);
  box-shadow: 0 0 0 3px rgba(168, 85, 247, 0.5);
}

.tag-input-label {
  position: absolute;
  left: 1rem;
  top: 0.5rem;
  font-size: 0.75rem;
  color: var(--text-muted);
  pointer-events: none;
  transition: color 200ms ease;
}

.tag-input.focused .tag-input-label {
  color: var(--purple);
}

/* === Profile Card === */
.profile-card {
  position: relative;
  overflow: hidden;
  width: 100%;
  max-width: 28rem;
  padding: 1.5rem;
  border-radius: 1rem;
  border: 1px solid var(--card-border);
  background: linear-gradient(135deg, var(--card-from), var(--card-to));
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
  color: #ffffff;
  animation: rise-in var(--transition-slow);
}

.profile-card-glow {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, #a855f7, #ec4899);
  opacity: 0.1;
}

.profile-card-body {
  position: relative;
}

.profile-card-title {
  font-size: 1.875rem;
  text-align: center;
  margin-bottom: 1.5rem;
}

.profile-rows {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.profile-row {
  display: flex;
  align-items: center;
  padding: 0.75rem;
  border-radius: 0.5rem;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
  animation: slide-in var(--transition-normal);
}

.profile-row:hover {
  transform: scale(1.05);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
}

.platform-icon {
  width: 1.5rem;
  margin-right: 0.75rem;
  font-size: 1.25rem;
  text-align: center;
}

.profile-row-platform {
  font-weight: 500;
}

.profile-row-tag {
  margin-left: 0.5rem;
  font-weight: 700;
}

.platform-steam { background: linear-gradient(90deg, #4b5563, #3b82f6); }
.platform-xbox { background: linear-gradient(90deg, #16a34a, #4ade80); }
.platform-playstation { background: linear-gradient(90deg, #2563eb, #60a5fa); }
.platform-nintendo { background: linear-gradient(90deg, #dc2626, #f87171); }
.platform-twitch { background: linear-gradient(90deg, #9333ea, #c084fc); }
.platform-discord { background: linear-gradient(90deg, #4f46e5, #818cf8); }

/* === Buttons === */
.action-bar {
  margin-top: 2rem;
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.btn {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0.75rem 1.5rem;
  border: none;
  border-radius: 9999px;
  color: #ffffff;
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn:hover {
  transform: scale(1.05);
}

.btn:active {
  transform: scale(0.95);
}

.btn-icon {
  margin-right: 0.5rem;
}

.btn-primary { background: var(--purple-strong); }
.btn-primary:hover { background: #7e22ce; }
.btn-share { background: var(--blue); }
.btn-share:hover { background: var(--blue-strong); }
.btn-danger { background: var(--red); }
.btn-danger:hover { background: var(--red-strong); }
.btn-neutral { background: var(--gray); }
.btn-neutral:hover { background: var(--gray-strong); }

/* === Confetti === */
.confetti-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.confetti-piece {
  position: absolute;
  left: 50%;
  width: 8px;
  height: 12px;
  border-radius: 2px;
  opacity: 0;
  animation: confetti-burst 1.8s cubic-bezier(0.2, 0.8, 0.4, 1) forwards;
}

/* === Animations === */
@keyframes confetti-burst {
  0% {
    opacity: 1;
    transform: translate(0, 0) rotate(0deg);
  }
  60% {
    opacity: 1;
    transform: translate(var(--dx), var(--dy)) rotate(360deg);
  }
  100% {
    opacity: 0;
    transform: translate(var(--dx), calc(var(--dy) + 240px)) rotate(540deg);
  }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slide-in {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}
"#;
