//! Token substitution into the HTML page template.
//!
//! Dimensions are substituted once, when the projector is created. Background
//! and shapes are substituted on every render. Each substitution is a single
//! pass over the template, so a value that happens to spell a token is never
//! substituted itself.

use log::warn;

use super::constants::*;

/// The page template bundled with the crate.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../../templates/slide.html");

/// Replaces the width and height tokens with the canvas size in pixels.
pub(crate) fn substitute_dimensions(template: &str, width: u32, height: u32) -> String {
    if !template.contains(SHAPES_TOKEN) {
        warn!("Template has no {} token, shapes will not be rendered", SHAPES_TOKEN);
    }
    replace_tokens(
        template,
        &[
            (WIDTH_TOKEN, width.to_string().as_str()),
            (HEIGHT_TOKEN, height.to_string().as_str()),
        ],
    )
}

/// Replaces the background and shapes tokens.
///
/// Without a background the token becomes `none`, which is a valid
/// `background-image` value.
pub(crate) fn substitute_content(
    template: &str,
    background: Option<&str>,
    shapes: &str,
) -> String {
    replace_tokens(
        template,
        &[
            (BACKGROUND_TOKEN, background.unwrap_or(NO_BACKGROUND)),
            (SHAPES_TOKEN, shapes),
        ],
    )
}

/// Replaces every occurrence of each token, scanning the template once from
/// left to right. Substituted values are copied as they are.
fn replace_tokens(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((start, token, value)) = substitutions
        .iter()
        .filter_map(|(token, value)| rest.find(token).map(|start| (start, *token, *value)))
        .min_by_key(|(start, _, _)| *start)
    {
        output.push_str(&rest[..start]);
        output.push_str(value);
        rest = &rest[start + token.len()..];
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_has_all_tokens() {
        for token in [WIDTH_TOKEN, HEIGHT_TOKEN, BACKGROUND_TOKEN, SHAPES_TOKEN] {
            assert!(DEFAULT_TEMPLATE.contains(token), "missing {token}");
        }
    }

    #[test]
    fn test_substitute_dimensions() {
        let page = substitute_dimensions("$$width$$x$$height$$ $$shapes$$", 640, 360);
        assert_eq!(page, "640x360 $$shapes$$");
    }

    #[test]
    fn test_substitute_content() {
        let template = "bg=$$background$$;[$$shapes$$]";
        assert_eq!(substitute_content(template, None, "S"), "bg=none;[S]");
        assert_eq!(
            substitute_content(template, Some("url(Background.png)"), "S"),
            "bg=url(Background.png);[S]"
        );
    }

    #[test]
    fn test_shape_text_is_not_reinterpreted() {
        let page = substitute_content(
            "$$background$$|$$shapes$$",
            Some("url(a.png)"),
            "$$background$$",
        );
        assert_eq!(page, "url(a.png)|$$background$$");
    }

    #[test]
    fn test_background_value_is_not_reinterpreted() {
        let page = substitute_content(
            "$$background$$|$$shapes$$",
            Some("url($$shapes$$.png)"),
            "S",
        );
        assert_eq!(page, "url($$shapes$$.png)|S");
    }

    #[test]
    fn test_repeated_tokens_are_all_replaced() {
        let page = substitute_dimensions("$$width$$ $$height$$ $$width$$", 640, 360);
        assert_eq!(page, "640 360 640");
    }
}
