// Shared prompt-building utilities.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Inserted values are never rescanned, so user text that happens to contain a
/// placeholder is copied verbatim. Braces that do not form a known placeholder
/// (for example a JSON example in the template) are left untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let matched = values.iter().find_map(|(name, value)| {
            let placeholder_len = name.len() + 2;
            let is_match = tail.len() >= placeholder_len
                && tail[1..].starts_with(name)
                && tail[1 + name.len()..].starts_with('}');
            is_match.then_some((placeholder_len, *value))
        });
        match matched {
            Some((len, value)) => {
                out.push_str(value);
                rest = &tail[len..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
