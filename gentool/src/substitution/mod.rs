//! Placeholder substitution rules
//!
//! Each [`GenerationType`] owns an ordered table of placeholder literals and
//! functions deriving their replacement from the domain name. Tables list
//! longer tokens before the shorter tokens they contain, so that
//! `ExampleApplication` is consumed whole before bare `Example` is looked at.
//!
//! Matching is plain substring replacement with no word-boundary anchoring:
//! `MyExampleThing` becomes `MyBillingThing` for the domain `Billing`.
//!
//! # Example
//!
//! ```rust
//! use gentool::generation::GenerationType;
//! use gentool::substitution::RuleSet;
//!
//! let subs = RuleSet::for_type(GenerationType::Module).bind("Billing");
//! assert_eq!(subs.apply("ExampleApplication.java"), "BillingApplication.java");
//! ```

use std::borrow::Cow;

use crate::generation::GenerationType;

/// A single placeholder and the function deriving its replacement
#[derive(Clone, Copy)]
pub struct Rule {
    /// Literal looked for in names and contents
    pub placeholder: &'static str,
    /// Derives the replacement from the (capitalized) domain name
    pub derive: fn(&str) -> String,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

const MODULE_RULES: &[Rule] = &[
    Rule {
        placeholder: "examplemodule",
        derive: str::to_lowercase,
    },
    Rule {
        placeholder: "ExampleApplication",
        derive: |domain| format!("{domain}Application"),
    },
    Rule {
        placeholder: "Example",
        derive: str::to_string,
    },
    Rule {
        placeholder: "example",
        derive: str::to_lowercase,
    },
    Rule {
        placeholder: "EXAMPLE",
        derive: str::to_uppercase,
    },
];

const CRUD_RULES: &[Rule] = &[
    Rule {
        placeholder: "CrudExample",
        derive: str::to_string,
    },
    Rule {
        placeholder: "crudExample",
        derive: lower_first,
    },
    Rule {
        placeholder: "crudexample",
        derive: str::to_lowercase,
    },
    Rule {
        placeholder: "CRUDEXAMPLE",
        derive: str::to_uppercase,
    },
];

/// Ordered rule table of one generation type
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    rules: &'static [Rule],
}

impl RuleSet {
    /// Rule table for `gen_type`
    #[must_use]
    pub const fn for_type(gen_type: GenerationType) -> Self {
        let rules = match gen_type {
            GenerationType::Module => MODULE_RULES,
            GenerationType::Crud => CRUD_RULES,
        };
        Self { rules }
    }

    /// Rules in application order
    #[must_use]
    pub const fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Resolve every replacement for a concrete domain name
    #[must_use]
    pub fn bind(&self, domain_name: &str) -> Substitutions {
        let pairs = self
            .rules
            .iter()
            .map(|rule| (rule.placeholder, (rule.derive)(domain_name)))
            .collect();
        Substitutions { pairs }
    }
}

/// Placeholder/replacement pairs bound to one domain name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    pairs: Vec<(&'static str, String)>,
}

impl Substitutions {
    /// Apply every pair in order, each as a global literal replace
    ///
    /// Borrows the input when no placeholder occurs in it.
    #[must_use]
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mut output = Cow::Borrowed(input);
        for (placeholder, replacement) in &self.pairs {
            if output.contains(placeholder) {
                output = Cow::Owned(output.replace(placeholder, replacement));
            }
        }
        output
    }

    /// Whether any placeholder occurs in `input`
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.pairs
            .iter()
            .any(|(placeholder, _)| input.contains(placeholder))
    }

    /// Bound pairs in application order
    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Upper-case the first character, leaving the rest untouched
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Lower-case the first character, leaving the rest untouched
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
