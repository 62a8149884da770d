//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. D3 itself is loaded by the host page.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static MARKET_CHART_JS: &str = include_str!("../assets/js/market-chart.js");

/// Render polls every 100 ms; give up after ten seconds.
const RENDER_MAX_ATTEMPTS: u32 = 100;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Market chart JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stashed on `window` and evaluated at global scope once D3
/// is available, then their entry points are promoted to `window.*`.
/// Safe to call more than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, MARKET_CHART_JS].join("\n");

    call_js(&format!(
        "if (!window.__marketChartsReady) {{ window.__marketChartScripts = {}; }}",
        js_string_literal(&all_js)
    ));

    let init_js = r#"
        (function() {
            if (window.__marketChartsReady || window.__marketChartsPolling) return;
            window.__marketChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__marketChartScripts);
                    delete window.__marketChartScripts;
                    if (typeof renderMarketChart !== 'undefined') window.renderMarketChart = renderMarketChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__marketChartsReady = true;
                    console.log('Market charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Build the JS that renders a chart spec once scripts and container exist.
fn render_chart_js(container_id: &str, spec_json: &str) -> String {
    let id = js_string_literal(container_id);
    let spec = js_string_literal(spec_json);
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (attempts > {max_attempts}) {{
                    clearInterval(poll);
                    console.error('[Market] gave up rendering ' + {id} + ': D3 or the container never became available');
                    return;
                }}
                if (window.__marketChartsReady &&
                    typeof window.renderMarketChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderMarketChart({id}, {spec});
                    }} catch(e) {{ console.error('[Market] renderMarketChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        max_attempts = RENDER_MAX_ATTEMPTS,
    )
}

/// Render a [`ChartSpec`](crate::chart_spec::ChartSpec) JSON document into
/// the element with `container_id`, replacing whatever was drawn there.
pub fn render_chart(container_id: &str, spec_json: &str) {
    log::debug!(
        "render_chart: {} ({} bytes of spec)",
        container_id,
        spec_json.len()
    );
    call_js(&render_chart_js(container_id, spec_json));
}

/// Clear the chart in the given container, if it is in the document.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(container_id));
    match element {
        Some(el) => el.set_inner_html(""),
        None => log::debug!("destroy_chart: no element '{}'", container_id),
    }
}
