//! `PascalCase` conversion for GraphQL definition names.
//!
//! Type names in the generated declarations must line up with the names the
//! TypeScript types plugins emit, so word splitting follows the same rules:
//!
//! - a lower-case letter or digit followed by an upper-case letter starts a new word
//!   (`createAuthor` → `create Author`)
//! - an upper-case letter followed by an upper-case letter and a lower-case one
//!   starts a new word before the second (`HTTPServer` → `HTTP Server`)
//! - any run of characters that are not ASCII letters or digits is a separator

/// Convert a name to `PascalCase`.
///
/// ```
/// use graphql_typed_files_modules::pascal_case;
///
/// assert_eq!(pascal_case("authors"), "Authors");
/// assert_eq!(pascal_case("createAuthor"), "CreateAuthor");
/// assert_eq!(pascal_case("get_user_by_ID"), "GetUserById");
/// ```
#[must_use]
pub fn pascal_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(index, word)| transform_word(word, index))
        .collect()
}

fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();

    // `fooBar` / `foo1Bar` boundaries
    let mut split: Vec<Option<char>> = Vec::with_capacity(chars.len() * 2);
    for (i, &c) in chars.iter().enumerate() {
        split.push(Some(c));
        let next = chars.get(i + 1).copied();
        if (c.is_ascii_lowercase() || c.is_ascii_digit())
            && next.is_some_and(|n| n.is_ascii_uppercase())
        {
            split.push(None);
        }
    }

    // `HTTPServer` boundaries
    let char_at = |at: usize| split.get(at).copied().flatten();
    let upper = |at: usize| char_at(at).is_some_and(|ch| ch.is_ascii_uppercase());
    let lower = |at: usize| char_at(at).is_some_and(|ch| ch.is_ascii_lowercase());

    let mut marked: Vec<Option<char>> = Vec::with_capacity(split.len() * 2);
    for (i, &c) in split.iter().enumerate() {
        marked.push(c);
        if upper(i) && upper(i + 1) && lower(i + 2) {
            marked.push(None);
        }
    }

    let mut words = Vec::new();
    let mut current = String::new();
    for c in marked {
        match c {
            Some(ch) if ch.is_ascii_alphanumeric() => current.push(ch),
            _ => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn transform_word(word: &str, index: usize) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().to_ascii_lowercase();

    if index > 0 && first.is_ascii_digit() {
        format!("_{first}{rest}")
    } else {
        format!("{}{rest}", first.to_ascii_uppercase())
    }
}
