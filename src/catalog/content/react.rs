//! React category source.

use crate::catalog::{SkillLevel, Snippet, SnippetLanguage};

pub(super) const SNIPPETS: &[Snippet] = &[
    Snippet {
        id: "react-fetch-hook",
        title: "useFetch with AbortController",
        description: "Data-fetching hook that cancels the in-flight request when the component unmounts or the URL changes.",
        code: r##"
import { useEffect, useState } from "react";

export function useFetch<T>(url: string) {
  const [data, setData] = useState<T | null>(null);
  const [error, setError] = useState<Error | null>(null);

  useEffect(() => {
    const controller = new AbortController();
    setData(null);
    setError(null);

    fetch(url, { signal: controller.signal })
      .then((res) => {
        if (!res.ok) throw new Error(`HTTP ${res.status}`);
        return res.json() as Promise<T>;
      })
      .then(setData)
      .catch((err) => {
        if (err.name !== "AbortError") setError(err);
      });

    return () => controller.abort();
  }, [url]);

  return { data, error, loading: data === null && error === null };
}
"##,
        language: SnippetLanguage::Tsx,
        level: SkillLevel::Intermediate,
        tags: &["hooks", "fetch", "abort", "cleanup"],
        related: &["react-debounced-input", "js-retry-fetch"],
        featured_note: Some(
            "AbortController cleanup is the baseline for hand-rolled data fetching - most stale-state bugs in review trace back to a missing abort.",
        ),
    },
    Snippet {
        id: "react-debounced-input",
        title: "Debounced Search Input",
        description: "Controlled input that echoes keystrokes immediately but only propagates the value after a quiet period.",
        code: r##"
import { useEffect, useRef, useState } from "react";

export function SearchInput({
  onSearch,
  delay = 200,
}: {
  onSearch: (query: string) => void;
  delay?: number;
}) {
  const [value, setValue] = useState("");
  const timer = useRef<ReturnType<typeof setTimeout>>();

  useEffect(() => {
    timer.current = setTimeout(() => onSearch(value), delay);
    return () => clearTimeout(timer.current);
  }, [value, delay, onSearch]);

  return (
    <input
      type="search"
      value={value}
      placeholder="Search snippets..."
      onChange={(e) => setValue(e.target.value)}
    />
  );
}
"##,
        language: SnippetLanguage::Tsx,
        level: SkillLevel::Intermediate,
        tags: &["hooks", "debounce", "forms", "search"],
        related: &["js-debounce", "react-fetch-hook"],
        featured_note: Some(
            "The cleanup-on-every-render timer is the one debounce variant that survives StrictMode double effects.",
        ),
    },
    Snippet {
        id: "react-error-boundary",
        title: "Error Boundary with Reset",
        description: "Class-based error boundary exposing a reset callback so a subtree can recover without a full reload.",
        code: r##"
import { Component, type ReactNode } from "react";

type Props = { fallback: (reset: () => void) => ReactNode; children: ReactNode };
type State = { failed: boolean };

export class ErrorBoundary extends Component<Props, State> {
  state: State = { failed: false };

  static getDerivedStateFromError() {
    return { failed: true };
  }

  componentDidCatch(error: Error) {
    console.error("boundary caught", error);
  }

  reset = () => this.setState({ failed: false });

  render() {
    if (this.state.failed) return this.props.fallback(this.reset);
    return this.props.children;
  }
}
"##,
        language: SnippetLanguage::Tsx,
        level: SkillLevel::Advanced,
        tags: &["error-handling", "resilience", "class-components"],
        related: &["react-fetch-hook"],
        featured_note: None,
    },
    Snippet {
        id: "react-local-storage-state",
        title: "useLocalStorage",
        description: "useState drop-in that mirrors the value into localStorage and survives corrupt stored JSON.",
        code: r##"
import { useState } from "react";

export function useLocalStorage<T>(key: string, initial: T) {
  const [value, setValue] = useState<T>(() => {
    try {
      const raw = window.localStorage.getItem(key);
      return raw ? (JSON.parse(raw) as T) : initial;
    } catch {
      return initial;
    }
  });

  const set = (next: T) => {
    setValue(next);
    try {
      window.localStorage.setItem(key, JSON.stringify(next));
    } catch {
      // Storage full or denied: keep the in-memory value.
    }
  };

  return [value, set] as const;
}
"##,
        language: SnippetLanguage::Ts,
        level: SkillLevel::Beginner,
        tags: &["hooks", "localstorage", "persistence"],
        related: &["js-deep-clone"],
        featured_note: None,
    },
    Snippet {
        id: "react-portal-modal",
        title: "Modal via createPortal",
        description: "Minimal modal rendered into document.body with Escape-to-close and backdrop click handling.",
        code: r##"
import { useEffect, type ReactNode } from "react";
import { createPortal } from "react-dom";

export function Modal({
  open,
  onClose,
  children,
}: {
  open: boolean;
  onClose: () => void;
  children: ReactNode;
}) {
  useEffect(() => {
    if (!open) return;
    const onKey = (e: KeyboardEvent) => e.key === "Escape" && onClose();
    window.addEventListener("keydown", onKey);
    return () => window.removeEventListener("keydown", onKey);
  }, [open, onClose]);

  if (!open) return null;

  return createPortal(
    <div className="modal-backdrop" onClick={onClose}>
      <div className="modal-body" onClick={(e) => e.stopPropagation()}>
        {children}
      </div>
    </div>,
    document.body,
  );
}
"##,
        language: SnippetLanguage::Tsx,
        level: SkillLevel::Intermediate,
        tags: &["portal", "modal", "keyboard", "accessibility"],
        related: &["html-dialog-element"],
        featured_note: None,
    },
    Snippet {
        id: "react-controlled-form",
        title: "Controlled Form with Single Handler",
        description: "One change handler for every field, keyed by input name, instead of a useState per field.",
        code: r##"
import { useState, type ChangeEvent, type FormEvent } from "react";

export function SignupForm({ onSubmit }: { onSubmit: (f: Record<string, string>) => void }) {
  const [fields, setFields] = useState({ name: "", email: "" });

  const handleChange = (e: ChangeEvent<HTMLInputElement>) =>
    setFields((prev) => ({ ...prev, [e.target.name]: e.target.value }));

  const handleSubmit = (e: FormEvent) => {
    e.preventDefault();
    onSubmit(fields);
  };

  return (
    <form onSubmit={handleSubmit}>
      <input name="name" value={fields.name} onChange={handleChange} />
      <input name="email" type="email" value={fields.email} onChange={handleChange} />
      <button type="submit">Sign up</button>
    </form>
  );
}
"##,
        language: SnippetLanguage::Tsx,
        level: SkillLevel::Beginner,
        tags: &["forms", "state", "events"],
        related: &["html-form-validation"],
        featured_note: None,
    },
];
