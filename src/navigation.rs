//! Decides which links may leave the sandbox.
//!
//! Rendered documents are partly authored by third parties. The only links
//! handed to the privileged shell are absolute web URLs; everything else stays
//! with the sandbox's own handling.

const EXTERNAL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Whether `href` should be opened outside the application.
pub fn should_open_externally(href: &str) -> bool {
	EXTERNAL_PREFIXES.iter().any(|prefix| {
		href.get(..prefix.len())
			.is_some_and(|head| head.eq_ignore_ascii_case(prefix))
	})
}
