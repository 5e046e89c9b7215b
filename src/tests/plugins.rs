use super::*;
use pretty_assertions::assert_eq;

#[test]
fn math_renderer_plugin() {
    let renderer = CountingRenderer::default();
    let mut plugins = Plugins::default();
    plugins.render.math_renderer = Some(&renderer);

    html_plugins(
        "<p>\\(a\\) and $$b$$</p><pre>\\(c\\)</pre>",
        "<p><m>a</m> and <m display=\"\">b</m></p><pre>\\(c\\)</pre>",
        &plugins,
    );
    assert_eq!(renderer.calls.get(), 2);
}

#[test]
fn raw_markup_renderer() {
    struct MathMl;

    impl MathRendererAdapter for MathMl {
        fn render<'a>(
            &self,
            arena: &'a Arena<AstNode<'a>>,
            math: &str,
            options: &MathRenderOptions,
        ) -> Result<&'a AstNode<'a>, RenderError> {
            let mode = if options.display { "block" } else { "inline" };
            Ok(nodes::new_node(
                arena,
                NodeValue::Raw(format!("<math display=\"{}\"><mi>{}</mi></math>", mode, math)),
            ))
        }
    }

    let mut plugins = Plugins::default();
    plugins.render.math_renderer = Some(&MathMl);

    html_plugins(
        "<p>\\(x\\)</p>",
        "<p><math display=\"inline\"><mi>x</mi></math></p>",
        &plugins,
    );
}

#[test]
fn plugin_errors_use_the_policy() {
    let renderer = CountingRenderer::default();
    let mut plugins = Plugins::default();
    plugins.render.math_renderer = Some(&renderer);

    let err = render_html_with_plugins("<p>\\(!x\\)</p>", None, &plugins).unwrap_err();
    assert!(matches!(err, Error::Render(_)));

    html_plugins_opts(
        "<p>\\(!x\\)</p>",
        "<p><span class=\"math-error\" title=\"rejected !x\">!x</span></p>",
        OptionsOverride {
            error_policy: Some(RenderErrorPolicy::Isolate),
            ..OptionsOverride::default()
        },
        &plugins,
    );
}

#[cfg(feature = "bon")]
#[test]
fn plugins_builder() {
    let renderer = CountingRenderer::default();
    let plugins = Plugins::builder()
        .render(RenderPlugins::builder().math_renderer(&renderer).build())
        .build();

    html_plugins("\\[a\\]", "<m display=\"\">a</m>", &plugins);
}
