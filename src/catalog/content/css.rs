//! CSS category source.

use crate::catalog::{SkillLevel, Snippet, SnippetLanguage};

pub(super) const SNIPPETS: &[Snippet] = &[
    Snippet {
        id: "css-container-queries",
        title: "Container Queries",
        description: "Size a card by the width of its container, not the viewport - component-level responsiveness.",
        code: r##"
.card-grid {
  container-type: inline-size;
  container-name: cards;
}

.card {
  display: grid;
  gap: 0.5rem;
}

@container cards (min-width: 28rem) {
  .card {
    grid-template-columns: 8rem 1fr;
    gap: 1rem;
  }
}
"##,
        language: SnippetLanguage::Css,
        level: SkillLevel::Intermediate,
        tags: &["container-queries", "responsive", "layout"],
        related: &["css-grid-auto-fit"],
        featured_note: Some(
            "Container queries ended the era of viewport-breakpoint components; every design system refactor leans on them.",
        ),
    },
    Snippet {
        id: "css-grid-auto-fit",
        title: "Responsive Grid Without Media Queries",
        description: "auto-fit plus minmax lays out as many columns as fit, collapsing gracefully on narrow screens.",
        code: r##"
.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(min(14rem, 100%), 1fr));
  gap: 1rem;
}
"##,
        language: SnippetLanguage::Css,
        level: SkillLevel::Beginner,
        tags: &["grid", "responsive", "layout"],
        related: &["css-container-queries"],
        featured_note: None,
    },
    Snippet {
        id: "css-fluid-type",
        title: "Fluid Typography with clamp()",
        description: "Font size that scales smoothly between a floor and a ceiling, no breakpoints involved.",
        code: r##"
:root {
  /* floor: 1rem at 20rem viewport, ceiling: 1.5rem at 64rem */
  --fluid-body: clamp(1rem, 0.773rem + 1.136vw, 1.5rem);
}

body {
  font-size: var(--fluid-body);
  line-height: 1.5;
}

h1 {
  font-size: clamp(1.75rem, 1.2rem + 2.75vw, 3rem);
}
"##,
        language: SnippetLanguage::Css,
        level: SkillLevel::Intermediate,
        tags: &["typography", "clamp", "fluid"],
        related: &[],
        featured_note: None,
    },
    Snippet {
        id: "css-color-scheme",
        title: "Dark Mode via prefers-color-scheme",
        description: "Custom-property theming that follows the OS preference with a light default.",
        code: r##"
:root {
  color-scheme: light dark;
  --bg: #faf4ed;
  --fg: #575279;
  --accent: #b4637a;
}

@media (prefers-color-scheme: dark) {
  :root {
    --bg: #191724;
    --fg: #e0def4;
    --accent: #ebbcba;
  }
}

body {
  background: var(--bg);
  color: var(--fg);
}
"##,
        language: SnippetLanguage::Css,
        level: SkillLevel::Beginner,
        tags: &["dark-mode", "custom-properties", "theming"],
        related: &["css-fluid-type"],
        featured_note: None,
    },
    Snippet {
        id: "css-has-selector",
        title: "Parent Styling with :has()",
        description: "Style a form field wrapper based on the validity of the input inside it - no JavaScript.",
        code: r##"
.field:has(input:invalid:not(:placeholder-shown)) {
  border-color: crimson;
}

.field:has(input:valid:not(:placeholder-shown)) {
  border-color: seagreen;
}

/* Cards that contain an image get a different layout */
.card:has(img) {
  grid-template-rows: 10rem auto;
}
"##,
        language: SnippetLanguage::Css,
        level: SkillLevel::Advanced,
        tags: &["has", "selectors", "forms"],
        related: &["html-form-validation"],
        featured_note: None,
    },
    Snippet {
        id: "css-scroll-snap",
        title: "Scroll Snap Carousel",
        description: "A horizontally scrolling strip where items settle onto clean stops, pure CSS.",
        code: r##"
.carousel {
  display: flex;
  gap: 1rem;
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  scroll-padding-inline: 1rem;
}

.carousel > * {
  flex: 0 0 80%;
  scroll-snap-align: start;
}
"##,
        language: SnippetLanguage::Css,
        level: SkillLevel::Beginner,
        tags: &["scroll-snap", "carousel", "layout"],
        related: &[],
        featured_note: None,
    },
];
