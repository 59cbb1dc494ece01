//! HTML category source.

use crate::catalog::{SkillLevel, Snippet, SnippetLanguage};

pub(super) const SNIPPETS: &[Snippet] = &[
    Snippet {
        id: "html-dialog-element",
        title: "Native <dialog> Modal",
        description: "showModal() gives focus trapping, Escape handling and a ::backdrop for free.",
        code: r##"
<dialog id="confirm">
  <form method="dialog">
    <p>Delete this snippet?</p>
    <button value="cancel">Cancel</button>
    <button value="confirm" autofocus>Delete</button>
  </form>
</dialog>

<script>
  const dialog = document.getElementById("confirm");
  document.getElementById("open").addEventListener("click", () => dialog.showModal());
  dialog.addEventListener("close", () => {
    if (dialog.returnValue === "confirm") console.log("deleted");
  });
</script>
"##,
        language: SnippetLanguage::Html,
        level: SkillLevel::Intermediate,
        tags: &["dialog", "modal", "accessibility"],
        related: &["react-portal-modal", "html-popover-attribute"],
        featured_note: Some(
            "The built-in dialog finally made hand-rolled focus traps a code smell rather than a necessity.",
        ),
    },
    Snippet {
        id: "html-details-accordion",
        title: "Accordion from <details>",
        description: "Exclusive accordion using the name attribute - one panel open at a time, zero script.",
        code: r##"
<details name="faq" open>
  <summary>What is a snippet?</summary>
  <p>A small, reusable piece of example code.</p>
</details>

<details name="faq">
  <summary>Can I favorite one?</summary>
  <p>Yes - favorites are stored locally on your machine.</p>
</details>

<details name="faq">
  <summary>Is there a search?</summary>
  <p>Title, description and tags are all searchable.</p>
</details>
"##,
        language: SnippetLanguage::Html,
        level: SkillLevel::Beginner,
        tags: &["details", "accordion", "no-js"],
        related: &[],
        featured_note: None,
    },
    Snippet {
        id: "html-popover-attribute",
        title: "Popover API",
        description: "Declarative popovers with light-dismiss and top-layer rendering via two attributes.",
        code: r##"
<button popovertarget="tips" popovertargetaction="toggle">
  Keyboard shortcuts
</button>

<div id="tips" popover>
  <h2>Shortcuts</h2>
  <ul>
    <li><kbd>/</kbd> focus search</li>
    <li><kbd>f</kbd> toggle favorite</li>
    <li><kbd>Esc</kbd> close</li>
  </ul>
</div>
"##,
        language: SnippetLanguage::Html,
        level: SkillLevel::Advanced,
        tags: &["popover", "top-layer", "no-js"],
        related: &["html-dialog-element"],
        featured_note: None,
    },
    Snippet {
        id: "html-form-validation",
        title: "Built-In Form Validation",
        description: "Constraint attributes plus one CSS hook cover most validation UX before any JavaScript.",
        code: r##"
<form>
  <label>
    Email
    <input type="email" name="email" required placeholder=" " />
  </label>

  <label>
    Username
    <input
      type="text"
      name="username"
      required
      minlength="3"
      pattern="[a-z0-9-]+"
      title="Lowercase letters, digits and dashes only"
      placeholder=" "
    />
  </label>

  <button type="submit">Create account</button>
</form>
"##,
        language: SnippetLanguage::Html,
        level: SkillLevel::Beginner,
        tags: &["forms", "validation", "constraints"],
        related: &["css-has-selector", "react-controlled-form"],
        featured_note: None,
    },
    Snippet {
        id: "html-lazy-media",
        title: "Lazy, Responsive Images",
        description: "srcset, sizes, async decoding and native lazy loading in one img tag.",
        code: r##"
<img
  src="/img/cover-800.webp"
  srcset="/img/cover-400.webp 400w, /img/cover-800.webp 800w, /img/cover-1600.webp 1600w"
  sizes="(max-width: 40rem) 100vw, 40rem"
  width="800"
  height="450"
  alt="Editor with a snippet library open"
  loading="lazy"
  decoding="async"
/>
"##,
        language: SnippetLanguage::Html,
        level: SkillLevel::Beginner,
        tags: &["images", "performance", "lazy-loading"],
        related: &[],
        featured_note: None,
    },
];
