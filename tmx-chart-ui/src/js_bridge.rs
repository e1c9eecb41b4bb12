//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The matrix itself is plain RSX; only page-level effects that have no
//! Dioxus equivalent go through here: the body theme class and the
//! SVG -> canvas -> PNG download.

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('TMX JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `value` as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Add or remove the `dark-mode` class on `<body>`.
pub fn set_dark_mode(enabled: bool) {
    call_js(&format!(
        "document.body.classList.toggle('dark-mode', {});",
        enabled
    ));
}

/// Rasterize `svg` in the browser and offer it as a PNG download.
///
/// The page's readable stylesheets are inlined into the document first;
/// sheets that throw on `cssRules` (cross-origin) are skipped one by one.
/// The canvas is `width` x `height`, filled white before drawing.
pub fn download_png(svg: &str, width: u32, height: u32, file_name: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var svgString = {svg};
            var cssText = Array.from(document.styleSheets).map(function(ss) {{
                try {{
                    return Array.from(ss.cssRules).map(function(r) {{ return r.cssText; }}).join('\n');
                }} catch (e) {{
                    return '';
                }}
            }}).join('\n');
            svgString = svgString.replace(/<svg([^>]*)>/, function(_, attrs) {{
                return '<svg' + attrs + '><style>' + cssText + '</style>';
            }});

            var blob = new Blob([svgString], {{ type: 'image/svg+xml;charset=utf-8' }});
            var url = URL.createObjectURL(blob);
            var img = new Image();
            img.onload = function() {{
                var canvas = document.createElement('canvas');
                canvas.width = {width};
                canvas.height = {height};
                var ctx = canvas.getContext('2d');
                ctx.fillStyle = '#ffffff';
                ctx.fillRect(0, 0, canvas.width, canvas.height);
                ctx.drawImage(img, 0, 0);
                URL.revokeObjectURL(url);

                var link = document.createElement('a');
                link.download = {file_name};
                link.href = canvas.toDataURL('image/png');
                link.click();
            }};
            img.onerror = function(e) {{
                URL.revokeObjectURL(url);
                console.warn('[TMX] PNG export failed:', e);
            }};
            img.src = url;
        }})();
        "#,
        svg = js_string(svg),
        width = width,
        height = height,
        file_name = js_string(file_name),
    ));
}
