//! Page styles for the showcase window.

pub const PAGE_STYLES: &str = r#"
/* === Base === */
* {
  box-sizing: border-box;
}

html, body {
  margin: 0;
  padding: 0;
  background: #0a0a0a;
  color: #f5f5f5;
  font-family: -apple-system, BlinkMacSystemFont, 'Inter', 'Segoe UI', sans-serif;
  -webkit-font-smoothing: antialiased;
}

/* === Content Section === */
.content-section {
  padding: 4rem 0;
}

.content-section__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1rem;
}

.content-section__intro {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 1rem;
  margin-bottom: 2.5rem;
}

.content-section__heading {
  margin: 0;
  font-size: 1.5rem;
  font-weight: 600;
}

.content-section__paragraph {
  margin: 0.5rem 0 0;
  max-width: 42rem;
  color: #d4d4d8;
}

.content-section__cta {
  display: inline-flex;
  align-items: center;
  padding: 0.5rem 1rem;
  border-radius: 0.375rem;
  background: #f4f4f5;
  color: #18181b;
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
}

.content-section__cta:hover {
  background: #e4e4e7;
}

.content-section__grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
}

@media (min-width: 768px) {
  .content-section {
    padding: 6rem 0;
  }

  .content-section__intro {
    flex-direction: row;
    align-items: flex-end;
    justify-content: space-between;
    margin-bottom: 3.5rem;
  }

  .content-section__heading {
    font-size: 1.875rem;
  }

  .content-section__grid {
    grid-template-columns: repeat(3, 1fr);
  }
}
"#;
