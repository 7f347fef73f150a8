//! Browser snippets used by the theme provider
//!
//! Values are embedded as JSON string literals so storage keys and
//! attribute names can never break out of the script.

use super::provider::ThemeOptions;
use super::selection::{ResolvedTheme, ThemeSelection};

pub(crate) const SYSTEM_LISTENER: &str = r#"
var query = window.matchMedia("(prefers-color-scheme: dark)");
dioxus.send(query.matches);
query.addEventListener("change", function (e) { dioxus.send(e.matches); });
"#;

const NO_TRANSITIONS: &str = "*,*::before,*::after{transition:none!important}";

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

fn set_theme_js(attribute: &str, theme_expr: &str) -> String {
    if attribute == "class" {
        format!(
            "d.classList.remove(\"light\",\"dark\");d.classList.add({theme_expr});d.style.colorScheme={theme_expr};"
        )
    } else {
        format!(
            "d.setAttribute({},{theme_expr});d.style.colorScheme={theme_expr};",
            js_string(attribute)
        )
    }
}

/// Runs before first paint: applies the stored (or default) theme so the
/// page never flashes the wrong colors.
pub fn init_script(options: &ThemeOptions) -> String {
    format!(
        "(function(){{try{{var d=document.documentElement;\
var s=localStorage.getItem({key})||{default};var r=s;\
if(s===\"system\"){{r={enable_system}&&window.matchMedia(\"(prefers-color-scheme: dark)\").matches?\"dark\":\"light\";}}\
if(r!==\"light\"&&r!==\"dark\"){{r=\"light\";}}\
{set}}}catch(e){{}}}})();",
        key = js_string(options.storage_key),
        default = js_string(options.default_theme.as_str()),
        enable_system = options.enable_system,
        set = set_theme_js(options.attribute, "r"),
    )
}

pub fn apply_script(options: &ThemeOptions, resolved: ResolvedTheme) -> String {
    let theme = js_string(resolved.class());
    let set = set_theme_js(options.attribute, &theme);
    if options.disable_transition_on_change {
        format!(
            "(function(){{var d=document.documentElement;\
var css=document.createElement(\"style\");css.appendChild(document.createTextNode({style}));\
document.head.appendChild(css);{set}\
window.getComputedStyle(document.body);\
setTimeout(function(){{document.head.removeChild(css);}},1);}})();",
            style = js_string(NO_TRANSITIONS),
        )
    } else {
        format!("(function(){{var d=document.documentElement;{set}}})();")
    }
}

pub fn persist_script(storage_key: &str, selection: ThemeSelection) -> String {
    format!(
        "try{{localStorage.setItem({},{});}}catch(e){{}}",
        js_string(storage_key),
        js_string(selection.as_str())
    )
}

/// Sends the stored selection (or null) back through `dioxus.send`.
pub fn read_stored_script(storage_key: &str) -> String {
    format!(
        "var v=null;try{{v=localStorage.getItem({});}}catch(e){{}}dioxus.send(v);",
        js_string(storage_key)
    )
}
