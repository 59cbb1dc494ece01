//! JavaScript category source.

use crate::catalog::{SkillLevel, Snippet, SnippetLanguage};

pub(super) const SNIPPETS: &[Snippet] = &[
    Snippet {
        id: "js-debounce",
        title: "Trailing-Edge Debounce",
        description: "Collapse a burst of calls into one, fired after the burst goes quiet. Each new call resets the timer.",
        code: r##"
export function debounce(fn, wait = 200) {
  let timer = null;

  function debounced(...args) {
    clearTimeout(timer);
    timer = setTimeout(() => {
      timer = null;
      fn.apply(this, args);
    }, wait);
  }

  debounced.cancel = () => {
    clearTimeout(timer);
    timer = null;
  };

  return debounced;
}

// const onType = debounce((q) => search(q), 200);
// input.addEventListener("input", (e) => onType(e.target.value));
"##,
        language: SnippetLanguage::Js,
        level: SkillLevel::Beginner,
        tags: &["debounce", "timers", "events"],
        related: &["react-debounced-input"],
        featured_note: Some(
            "The cancel handle is the part everyone omits - and the part that prevents stale updates after teardown.",
        ),
    },
    Snippet {
        id: "js-group-by",
        title: "Group an Array by Key",
        description: "Object.groupBy with a reduce fallback for runtimes that predate it.",
        code: r##"
const snippets = [
  { title: "useFetch", level: "intermediate" },
  { title: "debounce", level: "beginner" },
  { title: "Result type", level: "intermediate" },
];

// Built-in (Node 21+, evergreen browsers):
const byLevel = Object.groupBy(snippets, (s) => s.level);

// Fallback:
const byLevelCompat = snippets.reduce((acc, s) => {
  (acc[s.level] ??= []).push(s);
  return acc;
}, {});

console.log(Object.keys(byLevel)); // ["intermediate", "beginner"]
"##,
        language: SnippetLanguage::Js,
        level: SkillLevel::Beginner,
        tags: &["arrays", "grouping", "reduce"],
        related: &[],
        featured_note: None,
    },
    Snippet {
        id: "js-retry-fetch",
        title: "Fetch with Exponential Backoff",
        description: "Retry transient failures with doubling delays and a hard attempt cap; 4xx responses fail fast.",
        code: r##"
const sleep = (ms) => new Promise((resolve) => setTimeout(resolve, ms));

export async function fetchWithRetry(url, { attempts = 3, baseDelay = 250 } = {}) {
  let lastError;

  for (let attempt = 0; attempt < attempts; attempt++) {
    try {
      const res = await fetch(url);
      if (res.ok) return res;
      if (res.status >= 400 && res.status < 500) {
        throw new Error(`client error ${res.status}, not retrying`);
      }
      lastError = new Error(`HTTP ${res.status}`);
    } catch (err) {
      lastError = err;
    }
    await sleep(baseDelay * 2 ** attempt);
  }

  throw lastError;
}
"##,
        language: SnippetLanguage::Js,
        level: SkillLevel::Intermediate,
        tags: &["fetch", "retry", "backoff", "resilience"],
        related: &["ts-result-type", "react-fetch-hook"],
        featured_note: None,
    },
    Snippet {
        id: "js-event-emitter",
        title: "Tiny Event Emitter",
        description: "Map-of-sets emitter in ~20 lines; on() returns its own unsubscribe function.",
        code: r##"
export function createEmitter() {
  const listeners = new Map();

  return {
    on(event, handler) {
      if (!listeners.has(event)) listeners.set(event, new Set());
      listeners.get(event).add(handler);
      return () => listeners.get(event)?.delete(handler);
    },
    emit(event, payload) {
      listeners.get(event)?.forEach((handler) => handler(payload));
    },
  };
}

const bus = createEmitter();
const off = bus.on("saved", (id) => console.log("saved", id));
bus.emit("saved", 42);
off();
"##,
        language: SnippetLanguage::Js,
        level: SkillLevel::Intermediate,
        tags: &["events", "pubsub", "patterns"],
        related: &[],
        featured_note: None,
    },
    Snippet {
        id: "js-deep-clone",
        title: "Deep Clone with structuredClone",
        description: "The built-in that replaced JSON.parse(JSON.stringify(...)) - handles Dates, Maps, Sets and cycles.",
        code: r##"
const original = {
  created: new Date(),
  tags: new Set(["js", "clone"]),
  nested: { counts: new Map([["views", 10]]) },
};
original.self = original; // circular reference

const copy = structuredClone(original);

console.log(copy.created instanceof Date); // true
console.log(copy.tags.has("clone"));       // true
console.log(copy.self === copy);           // true, cycle preserved
console.log(copy !== original);            // true
"##,
        language: SnippetLanguage::Js,
        level: SkillLevel::Beginner,
        tags: &["clone", "structuredclone", "builtins"],
        related: &["react-local-storage-state"],
        featured_note: None,
    },
    Snippet {
        id: "js-pipe-compose",
        title: "pipe() for Left-to-Right Composition",
        description: "Reduce-based pipe that reads in execution order, with a unary-function contract.",
        code: r##"
const pipe = (...fns) => (input) => fns.reduce((acc, fn) => fn(acc), input);

const normalize = (s) => s.trim().toLowerCase();
const words = (s) => s.split(/\s+/);
const unique = (xs) => [...new Set(xs)];

const extractTags = pipe(normalize, words, unique);

console.log(extractTags("  React react   hooks "));
// ["react", "hooks"]
"##,
        language: SnippetLanguage::Js,
        level: SkillLevel::Intermediate,
        tags: &["functional", "composition", "pipe"],
        related: &[],
        featured_note: None,
    },
];
