use crate::i18n::bundle::with_bundle;
use dreamdle_game::{Attribute, AttributeValue};
use serde_json::Value;

fn lookup<'a>(table: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(table, |node, part| node.get(part))
}

fn plural_category(count: u64) -> &'static str {
    match count {
        0 => "zero",
        1 => "one",
        _ => "other",
    }
}

fn pick(value: &Value, count: Option<u64>) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(forms) => {
            let category = count.map_or("other", plural_category);
            forms
                .get(category)
                .or_else(|| forms.get("other"))
                .and_then(Value::as_str)
                .map(str::to_string)
        }
        _ => None,
    }
}

fn interpolate(mut text: String, args: &[(&str, &str)]) -> String {
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

fn resolve(key: &str, count: Option<u64>) -> Option<String> {
    with_bundle(|bundle| {
        lookup(&bundle.translations, key)
            .and_then(|v| pick(v, count))
            .or_else(|| lookup(&bundle.fallback, key).and_then(|v| pick(v, count)))
    })
}

/// Translate `key`, falling back to English and then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, &[])
}

/// Translate `key` and replace `{name}` placeholders.
#[must_use]
pub fn tr(key: &str, args: &[(&str, &str)]) -> String {
    resolve(key, None).map_or_else(|| key.to_string(), |text| interpolate(text, args))
}

/// Plural-aware translation; `{count}` is always available to the template.
#[must_use]
pub fn tc(key: &str, count: usize, args: &[(&str, &str)]) -> String {
    let count_text = count.to_string();
    let mut all = vec![("count", count_text.as_str())];
    all.extend_from_slice(args);
    resolve(key, Some(count as u64))
        .map_or_else(|| key.to_string(), |text| interpolate(text, &all))
}

/// Column label for a comparison key. Unknown keys are shown as sent.
#[must_use]
pub fn attribute_label(key: &str) -> String {
    Attribute::from_key(key).map_or_else(|| key.to_string(), |attr| t(&format!("attr.{}", attr.slug())))
}

/// Display text for a comparison value, translating known enum values.
#[must_use]
pub fn value_text(value: &AttributeValue) -> String {
    value
        .items()
        .iter()
        .map(|item| {
            let raw = item.to_string();
            let key = format!("value.{raw}");
            let translated = t(&key);
            if translated == key { raw } else { translated }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
