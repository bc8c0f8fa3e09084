//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

use flate2::read::GzDecoder;
use std::io::Read;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GDR JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderBarChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once D3 is ready,
/// and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS, BAR_CHART_JS, PIE_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__gdrChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__gdrChartScripts);
                    delete window.__gdrChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__gdrChartsReady = true;
                    console.log('GDR charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the death trend chart (line through per-year totals plus points).
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to initialize,
/// and the container DOM element to exist before rendering.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gdrChartsReady &&
                    typeof window.renderLineChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderLineChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GDR] renderLineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a per-year bar chart (deaths by cause, gender comparison).
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to initialize,
/// and the container DOM element to exist before rendering.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            console.log('[GDR Debug] Initiating polling for bar-chart');
            var poll = setInterval(function() {{
                console.log('[GDR Debug] Poll attempt:', {{
                    chartsReady: !!window.__gdrChartsReady,
                    functionAvailable: typeof window.renderBarChart !== 'undefined',
                    domExists: !!document.getElementById('{container_id}'),
                    timestamp: Date.now()
                }});
                if (window.__gdrChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GDR] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the global cause-of-death distribution pie.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to initialize,
/// and the container DOM element to exist before rendering.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gdrChartsReady &&
                    typeof window.renderPieChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderPieChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GDR] renderPieChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Fetch a gzip-compressed CSV served alongside the WASM bundle.
///
/// Some dev servers transparently decompress `.gz` responses, so the body
/// is sniffed for the gzip magic bytes before decoding.
pub async fn fetch_gz_csv(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window object")?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("fetch failed: {:?}", e))?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {} fetching {}", resp.status(), url));
    }

    let buf_promise = resp
        .array_buffer()
        .map_err(|e| format!("array_buffer failed: {:?}", e))?;
    let buf_value = JsFuture::from(buf_promise)
        .await
        .map_err(|e| format!("reading body failed: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buf_value).to_vec();

    if bytes.starts_with(&[0x1f, 0x8b]) {
        let mut decoder = GzDecoder::new(bytes.as_slice());
        let mut csv_data = String::new();
        decoder
            .read_to_string(&mut csv_data)
            .map_err(|e| format!("gzip decode failed: {}", e))?;
        log::info!(
            "[GDR Debug] fetch: decompressed {} bytes from {}",
            csv_data.len(),
            url
        );
        Ok(csv_data)
    } else {
        let csv_data =
            String::from_utf8(bytes).map_err(|e| format!("utf-8 decode failed: {}", e))?;
        log::info!(
            "[GDR Debug] fetch: received {} bytes (already decompressed) from {}",
            csv_data.len(),
            url
        );
        Ok(csv_data)
    }
}
