//! Dashboard template helpers
//!
//! Comparison and logic helpers (`eq`, `ne`, `not`, `len`, ...) are built
//! into handlebars itself; only `plural` is added.

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};

pub fn register_builtin_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("plural", Box::new(plural_helper));
}

/// Count with noun: {{plural 3 "record" "records"}} renders "3 records"
fn plural_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let count = h
        .param(0)
        .and_then(|p| p.value().as_u64())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("plural", 0))?;
    let singular = h
        .param(1)
        .and_then(|p| p.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("plural", 1))?;
    let plural = h
        .param(2)
        .and_then(|p| p.value().as_str())
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("plural", 2))?;

    let noun = if count == 1 { singular } else { plural };
    out.write(&format!("{} {}", count, noun))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        register_builtin_helpers(&mut handlebars);
        handlebars
    }

    #[test]
    fn test_plural_helper_with_builtin_len() {
        let handlebars = registry();
        let template = r#"{{plural (len rows) "record" "records"}}"#;

        let result = handlebars
            .render_template(template, &json!({"rows": [1, 2, 3]}))
            .unwrap();
        assert_eq!(result, "3 records");

        let result = handlebars
            .render_template(template, &json!({"rows": [1]}))
            .unwrap();
        assert_eq!(result, "1 record");
    }

    #[test]
    fn test_builtin_eq_still_available() {
        let handlebars = registry();
        let result = handlebars
            .render_template(
                "{{#if (eq a b)}}selected{{else}}plain{{/if}}",
                &json!({"a": 3, "b": 4}),
            )
            .unwrap();
        assert_eq!(result, "plain");
    }
}
