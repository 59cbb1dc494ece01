//! TypeScript category source.

use crate::catalog::{SkillLevel, Snippet, SnippetLanguage};

pub(super) const SNIPPETS: &[Snippet] = &[
    Snippet {
        id: "ts-result-type",
        title: "Result Type for Fallible Calls",
        description: "Discriminated union that makes error handling explicit at the type level instead of thrown exceptions.",
        code: r##"
type Result<T, E = Error> =
  | { ok: true; value: T }
  | { ok: false; error: E };

async function safeJson<T>(url: string): Promise<Result<T>> {
  try {
    const res = await fetch(url);
    if (!res.ok) {
      return { ok: false, error: new Error(`HTTP ${res.status}`) };
    }
    return { ok: true, value: (await res.json()) as T };
  } catch (err) {
    return { ok: false, error: err instanceof Error ? err : new Error(String(err)) };
  }
}

// Callers are forced to branch before touching the value:
const result = await safeJson<{ name: string }>("/api/user");
if (result.ok) {
  console.log(result.value.name);
} else {
  console.warn(result.error.message);
}
"##,
        language: SnippetLanguage::Ts,
        level: SkillLevel::Intermediate,
        tags: &["error-handling", "discriminated-union", "fetch"],
        related: &["ts-exhaustive-switch", "js-retry-fetch"],
        featured_note: Some(
            "Typed result unions keep failure paths visible in code review - the pattern ecosystem libraries converged on.",
        ),
    },
    Snippet {
        id: "ts-branded-ids",
        title: "Branded ID Types",
        description: "Nominal typing over structural typing: a UserId can no longer be passed where an OrderId is expected.",
        code: r##"
declare const brand: unique symbol;

type Brand<T, Name extends string> = T & { readonly [brand]: Name };

type UserId = Brand<string, "UserId">;
type OrderId = Brand<string, "OrderId">;

const asUserId = (raw: string): UserId => raw as UserId;
const asOrderId = (raw: string): OrderId => raw as OrderId;

function loadUser(id: UserId) {
  return fetch(`/api/users/${id}`);
}

const orderId = asOrderId("ord_123");
// loadUser(orderId);        // compile error: OrderId is not UserId
loadUser(asUserId("usr_42")); // ok
"##,
        language: SnippetLanguage::Ts,
        level: SkillLevel::Advanced,
        tags: &["branded-types", "nominal-typing", "type-safety"],
        related: &["ts-type-guards"],
        featured_note: None,
    },
    Snippet {
        id: "ts-exhaustive-switch",
        title: "Exhaustive Switch with never",
        description: "A default arm that assigns to never turns a forgotten union member into a compile error.",
        code: r##"
type PaymentState = "pending" | "settled" | "refunded";

function label(state: PaymentState): string {
  switch (state) {
    case "pending":
      return "Awaiting confirmation";
    case "settled":
      return "Paid";
    case "refunded":
      return "Refunded";
    default: {
      const unreachable: never = state;
      throw new Error(`unhandled state: ${unreachable}`);
    }
  }
}
"##,
        language: SnippetLanguage::Ts,
        level: SkillLevel::Beginner,
        tags: &["unions", "exhaustiveness", "never"],
        related: &["ts-result-type"],
        featured_note: None,
    },
    Snippet {
        id: "ts-type-guards",
        title: "User-Defined Type Guards",
        description: "Runtime checks that narrow unknown input into typed values at the API boundary.",
        code: r##"
interface Snippet {
  id: string;
  title: string;
  tags: string[];
}

function isSnippet(value: unknown): value is Snippet {
  if (typeof value !== "object" || value === null) return false;
  const candidate = value as Record<string, unknown>;
  return (
    typeof candidate.id === "string" &&
    typeof candidate.title === "string" &&
    Array.isArray(candidate.tags) &&
    candidate.tags.every((t) => typeof t === "string")
  );
}

const payload: unknown = JSON.parse(localStorage.getItem("snippet") ?? "null");
if (isSnippet(payload)) {
  console.log(payload.title); // narrowed to Snippet here
}
"##,
        language: SnippetLanguage::Ts,
        level: SkillLevel::Beginner,
        tags: &["type-guards", "narrowing", "validation"],
        related: &["ts-branded-ids"],
        featured_note: None,
    },
    Snippet {
        id: "ts-mapped-readonly",
        title: "DeepReadonly Mapped Type",
        description: "Recursive mapped type that freezes a config object shape all the way down.",
        code: r##"
type DeepReadonly<T> = {
  readonly [K in keyof T]: T[K] extends (...args: never[]) => unknown
    ? T[K]
    : T[K] extends object
      ? DeepReadonly<T[K]>
      : T[K];
};

interface AppConfig {
  api: { baseUrl: string; retries: number };
  features: { darkMode: boolean };
}

const config: DeepReadonly<AppConfig> = {
  api: { baseUrl: "https://api.example.dev", retries: 3 },
  features: { darkMode: true },
};

// config.api.retries = 5; // compile error: readonly all the way down
"##,
        language: SnippetLanguage::Ts,
        level: SkillLevel::Advanced,
        tags: &["mapped-types", "readonly", "config"],
        related: &["ts-strict-tsconfig"],
        featured_note: None,
    },
    Snippet {
        id: "ts-strict-tsconfig",
        title: "Strict tsconfig Baseline",
        description: "The compiler options worth turning on before the first line of application code.",
        code: r##"
{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ESNext",
    "moduleResolution": "bundler",
    "strict": true,
    "noUncheckedIndexedAccess": true,
    "exactOptionalPropertyTypes": true,
    "noFallthroughCasesInSwitch": true,
    "verbatimModuleSyntax": true,
    "skipLibCheck": true
  },
  "include": ["src"]
}
"##,
        language: SnippetLanguage::Json,
        level: SkillLevel::Beginner,
        tags: &["tsconfig", "strict", "tooling"],
        related: &["ts-mapped-readonly"],
        featured_note: Some(
            "noUncheckedIndexedAccess is the single most bug-preventing flag teams still forget to enable.",
        ),
    },
];
