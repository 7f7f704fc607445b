//! Candidate selection for ambiguous matches
//!
//! When a partial search hits several books, the command layer needs
//! exactly one. It depends only on the `Resolver` capability, so the
//! interactive prompt can be swapped for a deterministic choice in
//! scripts and tests.

use dialoguer::Input;

/// Turns an ordered candidate list into a single selection.
///
/// `select` receives the candidate count and returns a 0-based index,
/// or `None` when the selection was cancelled or invalid.
pub trait Resolver {
    fn select(&self, count: usize) -> Option<usize>;
}

/// Interactive resolver: reads one 1-based number from the terminal.
///
/// A single non-numeric or out-of-range answer cancels the selection;
/// there is no retry loop.
pub struct PromptResolver {
    pub prompt: String,
}

impl Resolver for PromptResolver {
    fn select(&self, count: usize) -> Option<usize> {
        let answer: String = Input::new()
            .with_prompt(self.prompt.as_str())
            .interact_text()
            .ok()?;
        parse_choice(&answer, count)
    }
}

/// Deterministic resolver carrying a predetermined 1-based choice,
/// taken from a `--select` flag.
pub struct FixedResolver {
    pub choice: usize,
}

impl Resolver for FixedResolver {
    fn select(&self, count: usize) -> Option<usize> {
        if (1..=count).contains(&self.choice) {
            Some(self.choice - 1)
        } else {
            None
        }
    }
}

fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    if (1..=count).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_resolver_is_one_based() {
        assert_eq!(FixedResolver { choice: 1 }.select(3), Some(0));
        assert_eq!(FixedResolver { choice: 3 }.select(3), Some(2));
    }

    #[test]
    fn test_fixed_resolver_rejects_out_of_range() {
        assert_eq!(FixedResolver { choice: 0 }.select(3), None);
        assert_eq!(FixedResolver { choice: 4 }.select(3), None);
        assert_eq!(FixedResolver { choice: 5 }.select(2), None);
    }

    #[test]
    fn test_parse_choice_rejects_garbage() {
        assert_eq!(parse_choice("two", 3), None);
        assert_eq!(parse_choice("", 3), None);
        assert_eq!(parse_choice("-1", 3), None);
        assert_eq!(parse_choice(" 2 ", 3), Some(1));
    }
}
