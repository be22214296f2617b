use regex::Regex;
use std::collections::HashMap;

use thiserror::Error;

use super::repository::LoadedTemplate;

/// Keys every notebook render must provide.
pub const REQUIRED_KEYS: &[&str] = &["call_tuesday", "call_date"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateRenderError {
    #[error("missing substitution key: {0}")]
    MissingVariable(String),
}

pub type RenderContext = HashMap<String, String>;

fn placeholder_regex() -> Regex {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("valid regex")
}

pub fn render(
    template: &LoadedTemplate,
    ctx: &RenderContext,
) -> Result<String, TemplateRenderError> {
    if let Some(key) = REQUIRED_KEYS.iter().find(|k| !ctx.contains_key(**k)) {
        return Err(TemplateRenderError::MissingVariable((*key).to_string()));
    }
    render_string(&template.body, ctx)
}

/// Replace every `{{name}}` in `template` with its value from `ctx`.
///
/// Single braces are left alone. An unknown name is an error; nothing is
/// partially rendered.
pub fn render_string(
    template: &str,
    ctx: &RenderContext,
) -> Result<String, TemplateRenderError> {
    let re = placeholder_regex();

    if let Some(missing) = re
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .find(|name| !ctx.contains_key(name))
    {
        return Err(TemplateRenderError::MissingVariable(missing));
    }

    let result = re.replace_all(template, |caps: &regex::Captures<'_>| ctx[&caps[1]].clone());
    Ok(result.into_owned())
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_regex().captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> RenderContext {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn replaces_with_and_without_inner_spaces() {
        let c = ctx(&[("a", "1"), ("b", "2")]);
        assert_eq!(render_string("{{a}}-{{ b }}", &c).unwrap(), "1-2");
    }

    #[test]
    fn single_braces_pass_through() {
        let c = ctx(&[("call_tuesday", "2024-06-04")]);
        let out = render_string(r#"print(f"for {tuesday_date} on {{call_tuesday}}")"#, &c)
            .unwrap();
        assert_eq!(out, r#"print(f"for {tuesday_date} on 2024-06-04")"#);
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let c = ctx(&[("a", "1")]);
        assert_eq!(
            render_string("{{a}} {{ghost}}", &c),
            Err(TemplateRenderError::MissingVariable("ghost".into()))
        );
    }

    #[test]
    fn render_requires_both_call_keys() {
        let tpl = LoadedTemplate {
            logical_name: "t".into(),
            path: None,
            body: "no placeholders".into(),
        };
        let c = ctx(&[("call_tuesday", "2024-06-04")]);
        assert_eq!(
            render(&tpl, &c),
            Err(TemplateRenderError::MissingVariable("call_date".into()))
        );
    }

    #[test]
    fn placeholders_are_deduplicated_in_order() {
        let names = placeholders("{{b}} {{a}} {{ b }} {x}");
        assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn builtin_template_renders_with_standard_keys() {
        let c = ctx(&[
            ("call_tuesday", "2024-06-04"),
            ("call_date", "2024-06-05"),
            ("author", "Ada"),
        ]);
        let out = render(&LoadedTemplate::builtin(), &c).unwrap();
        assert!(out.contains("title: \"Tidy Tuesday - 2024-06-04\""));
        assert!(out.contains("date: \"2024-06-05\""));
        assert!(out.contains("author: \"Ada\""));
        assert!(out.contains("tuesday_date = \"2024-06-04\""));
        assert!(out.contains("```{python}"));
        assert!(!out.contains("{{"));
    }
}
