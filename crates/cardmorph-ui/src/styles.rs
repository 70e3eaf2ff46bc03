//! Stylesheet for the expandable card components.

pub const CARD_STYLES: &str = r#"
/* === Card Tokens === */
:root {
  --card-surface: rgba(23, 23, 23, 0.5);
  --card-surface-hover: rgba(23, 23, 23, 0.7);
  --card-border: rgba(38, 38, 38, 0.6);
  --card-border-hover: rgba(64, 64, 64, 0.8);
  --card-overlay-bg: #0f1011;
  --card-text: #ffffff;
  --card-text-muted: #a3a3a3;
  --card-control: rgba(64, 64, 64, 0.8);
  --card-control-hover: #525252;
}

/* === Deck === */
.card-deck {
  outline: none;
}

/* === Collapsed Tile === */
.card-tile {
  position: relative;
  display: flex;
  flex-direction: column;
  height: 24rem;
  border-radius: 1.5rem;
  overflow: hidden;
  cursor: pointer;
  background: var(--card-surface);
  border: 1px solid var(--card-border);
  transition: border-color 200ms ease-out, background 200ms ease-out;
}

.card-tile:hover {
  border-color: var(--card-border-hover);
  background: var(--card-surface-hover);
}

.card-tile__image {
  position: absolute;
  inset: 0;
  z-index: 0;
}

.card-tile__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  object-position: center;
  background: #262626;
}

.card-tile__shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, #171717, rgba(23, 23, 23, 0.6), transparent);
}

.card-tile__bar {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem;
  background: linear-gradient(to top, #171717, rgba(23, 23, 23, 0.9), transparent);
}

.card-tile__text {
  flex: 1;
  min-width: 0;
}

.card-tile__title {
  color: var(--card-text);
  font-size: 1.25rem;
  font-weight: 500;
  line-height: 1.25;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.card-tile__description {
  color: var(--card-text-muted);
  font-size: 0.75rem;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.card-tile__cta {
  flex-shrink: 0;
  min-width: 2rem;
  height: 2rem;
  margin-left: 0.75rem;
  padding: 0 0.5rem;
  border: none;
  border-radius: 9999px;
  background: var(--card-control);
  color: var(--card-text);
  font-size: 1.125rem;
  font-weight: 300;
  cursor: pointer;
  transition: background 150ms ease, transform 150ms ease;
}

.card-tile__cta:hover {
  background: var(--card-control-hover);
  transform: scale(1.05) rotate(45deg);
}

/* === Backdrop === */
.card-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(0, 0, 0, 0.9);
  backdrop-filter: blur(12px);
  animation: card-fade-in 200ms ease;
}

/* === Expanded Overlay === */
.card-overlay-layer {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: grid;
  place-items: center;
  pointer-events: none;
}

.card-overlay-layer > * {
  pointer-events: auto;
}

.card-overlay {
  display: flex;
  flex-direction: column;
  width: 100%;
  max-width: 64rem;
  max-height: 90%;
  overflow: hidden;
  border-radius: 1.5rem;
  border: 1px solid rgba(38, 38, 38, 0.4);
  background: var(--card-overlay-bg);
  outline: none;
}

.card-overlay__image {
  width: 100%;
  height: 32rem;
  flex-shrink: 0;
}

.card-overlay__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  object-position: center;
  background: #262626;
}

.card-overlay__scroll {
  overflow-y: auto;
  scrollbar-width: none;
  max-width: 48rem;
  width: 100%;
  margin: 0 auto;
}

.card-overlay__header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  padding: 2rem;
}

.card-overlay__title {
  color: var(--card-text);
  font-size: 2.25rem;
  font-weight: 600;
  letter-spacing: -0.025em;
  line-height: 1.25;
}

.card-overlay__description {
  margin-top: 0.5rem;
  color: var(--card-text-muted);
  font-size: 1rem;
}

.card-overlay__body,
.card-overlay__extra {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 1.5rem;
  padding: 0 2rem 2rem;
  color: #d4d4d4;
  font-size: 1.125rem;
  animation: card-fade-in 300ms ease;
}

.card-overlay__extra:empty {
  display: none;
}

.card-body__heading {
  color: var(--card-text);
  font-size: 1.25rem;
  font-weight: 600;
}

.card-body__quote {
  border-left: 2px solid #404040;
  padding-left: 1rem;
  font-style: italic;
}

.card-body__list {
  padding-left: 1.25rem;
  list-style: disc;
}

/* === Close Control === */
.icon-btn {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  border: none;
  border-radius: 9999px;
  cursor: pointer;
}

.close-btn {
  width: 2rem;
  height: 2rem;
  margin-left: 1rem;
  background: #404040;
  color: var(--card-text);
  font-size: 1.125rem;
  font-weight: 300;
}

.close-btn:hover {
  background: var(--card-control-hover);
}

.overlay-close--corner {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 101;
  width: 1.5rem;
  height: 1.5rem;
  margin: 0;
  background: #ffffff;
  color: #000000;
}

@media (min-width: 1024px) {
  .overlay-close--corner {
    display: none;
  }
}

@keyframes card-fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_sits_above_backdrop() {
        assert!(CARD_STYLES.contains(".card-backdrop {\n  position: fixed;\n  inset: 0;\n  z-index: 50;"));
        assert!(CARD_STYLES.contains(".card-overlay-layer {\n  position: fixed;\n  inset: 0;\n  z-index: 100;"));
    }

    #[test]
    fn overlay_layer_passes_pointer_to_backdrop() {
        assert!(CARD_STYLES.contains("place-items: center;\n  pointer-events: none;\n}"));
        assert!(CARD_STYLES.contains(".card-overlay-layer > * {\n  pointer-events: auto;\n}"));
    }

    #[test]
    fn component_classes_are_styled() {
        for class in [
            ".card-deck",
            ".card-tile",
            ".card-tile__cta",
            ".card-overlay",
            ".card-overlay__body",
            ".close-btn",
            ".overlay-close--corner",
            ".card-body__list",
        ] {
            assert!(CARD_STYLES.contains(class), "missing {}", class);
        }
    }
}
