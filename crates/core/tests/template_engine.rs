use std::path::PathBuf;
use tidytemplate_core::templates::{
    LoadedTemplate, RenderContext, TemplateRenderError, placeholders, render,
};

fn loaded(contents: &str) -> LoadedTemplate {
    LoadedTemplate {
        logical_name: "test".into(),
        path: Some(PathBuf::from("test.qmd")),
        body: contents.to_string(),
    }
}

fn call_ctx() -> RenderContext {
    let mut ctx = RenderContext::new();
    ctx.insert("call_tuesday".into(), "2024-06-04".into());
    ctx.insert("call_date".into(), "2024-06-05".into());
    ctx
}

#[test]
fn render_replaces_known_variables() {
    let tpl = loaded("# Week of {{call_tuesday}} (made {{call_date}})");
    let out = render(&tpl, &call_ctx()).expect("render ok");
    assert_eq!(out, "# Week of 2024-06-04 (made 2024-06-05)");
}

#[test]
fn render_rejects_unknown_variables() {
    let tpl = loaded("Hello {{call_tuesday}} and {{unknown}}!");
    let err = render(&tpl, &call_ctx()).unwrap_err();
    assert_eq!(err, TemplateRenderError::MissingVariable("unknown".into()));
}

#[test]
fn render_requires_call_tuesday_even_if_unused() {
    let tpl = loaded("static text");
    let mut ctx = call_ctx();
    ctx.remove("call_tuesday");
    let err = render(&tpl, &ctx).unwrap_err();
    assert_eq!(err.to_string(), "missing substitution key: call_tuesday");
}

#[test]
fn builtin_placeholders_are_the_documented_set() {
    let names = placeholders(&LoadedTemplate::builtin().body);
    assert_eq!(names, vec!["call_tuesday", "author", "call_date"]);
}
